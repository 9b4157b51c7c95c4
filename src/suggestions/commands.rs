use tauri::State;

use crate::{
    analysis::FALLBACK_EMOTION,
    models::{emotion_catalog, EmotionInfo},
    suggestions::{suggestions_for, suggestions_for_label, SuggestionSet},
    AppState,
};

/// Suggestions for `emotion`, or for the current emotion when omitted.
#[tauri::command]
pub async fn get_suggestions(
    state: State<'_, AppState>,
    emotion: Option<String>,
) -> Result<&'static SuggestionSet, String> {
    match emotion {
        Some(label) => Ok(suggestions_for_label(&label)),
        None => {
            let current = state.journal.current().await;
            Ok(suggestions_for(
                current.map(|sample| sample.label).unwrap_or(FALLBACK_EMOTION),
            ))
        }
    }
}

#[tauri::command]
pub fn list_emotions() -> Vec<EmotionInfo> {
    emotion_catalog()
}
