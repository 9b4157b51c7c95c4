use chrono::Local;
use serde::Serialize;
use tauri::State;

use crate::{
    history::{export_file_name, export_json, query_history, HistoryQuery, Trend},
    journal::DashboardOverview,
    models::EmotionSample,
    AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryExport {
    pub file_name: String,
    pub contents: String,
}

#[tauri::command]
pub async fn get_history(
    state: State<'_, AppState>,
    query: Option<HistoryQuery>,
) -> Result<Vec<EmotionSample>, String> {
    let history = state.journal.history().await;
    Ok(query_history(
        history.entries(),
        &query.unwrap_or_default(),
    ))
}

#[tauri::command]
pub async fn clear_history(state: State<'_, AppState>) -> Result<(), String> {
    state.journal.clear().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_trend(state: State<'_, AppState>) -> Result<Trend, String> {
    Ok(state.journal.trend().await)
}

#[tauri::command]
pub async fn get_dashboard(state: State<'_, AppState>) -> Result<DashboardOverview, String> {
    Ok(state.journal.overview(Local::now().date_naive()).await)
}

/// The frontend saves `contents` under `file_name`.
#[tauri::command]
pub async fn export_history(state: State<'_, AppState>) -> Result<HistoryExport, String> {
    let history = state.journal.history().await;
    if history.is_empty() {
        return Err("No recordings to export".into());
    }
    let contents = export_json(history.entries()).map_err(|e| e.to_string())?;
    Ok(HistoryExport {
        file_name: export_file_name(Local::now().date_naive()),
        contents,
    })
}
