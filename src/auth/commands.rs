use tauri::State;

use crate::{models::PublicUser, AppState};

#[tauri::command]
pub async fn signup(
    state: State<'_, AppState>,
    email: String,
    password: String,
    name: String,
) -> Result<PublicUser, String> {
    state
        .auth
        .signup(&email, &password, &name)
        .await
        .map_err(|e| e.user_message())
}

#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    email: String,
    password: String,
) -> Result<PublicUser, String> {
    state
        .auth
        .login(&email, &password)
        .await
        .map_err(|e| e.user_message())
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    state.auth.logout().await.map_err(|e| e.user_message())
}

#[tauri::command]
pub async fn get_current_user(state: State<'_, AppState>) -> Result<Option<PublicUser>, String> {
    state.auth.current_user().await.map_err(|e| e.user_message())
}
