use tauri::State;

use crate::{models::EmotionSample, AppState};

/// The recording itself never reaches the backend; only the request to analyze it.
#[tauri::command]
pub async fn analyze_recording(state: State<'_, AppState>) -> Result<EmotionSample, String> {
    let delay = state.settings.analysis().delay();
    state
        .journal
        .analyze(delay)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_current_emotion(
    state: State<'_, AppState>,
) -> Result<Option<EmotionSample>, String> {
    Ok(state.journal.current().await)
}
