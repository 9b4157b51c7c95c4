pub mod analysis;
pub mod auth;
pub mod db;
pub mod history;
pub mod journal;
pub mod models;
pub mod settings;
pub mod storage;
pub mod suggestions;
pub mod utils;

pub use analysis::{sample, EmotionSampler, WeightTable};
pub use auth::{AuthError, AuthService};
pub use db::Database;
pub use history::{HistoryLog, Trend};
pub use journal::{DashboardOverview, MoodJournal};
pub use models::{Emotion, EmotionSample, PublicUser};
pub use settings::{AnalysisSettings, SettingsStore};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
mod desktop {
    use tauri::{Manager, State};

    use crate::{
        analysis::{
            commands::{analyze_recording, get_current_emotion},
            EmotionSampler,
        },
        auth::{
            commands::{get_current_user, login, logout, signup},
            AuthService,
        },
        db::Database,
        history::commands::{clear_history, export_history, get_dashboard, get_history, get_trend},
        journal::MoodJournal,
        settings::{AnalysisSettings, SettingsStore},
        suggestions::commands::{get_suggestions, list_emotions},
    };

    pub(crate) struct AppState {
        pub(crate) journal: MoodJournal<Database>,
        pub(crate) auth: AuthService<Database>,
        pub(crate) settings: SettingsStore,
    }

    #[tauri::command]
    fn get_analysis_settings(state: State<AppState>) -> Result<AnalysisSettings, String> {
        Ok(state.settings.analysis())
    }

    #[tauri::command]
    fn set_analysis_settings(
        settings: AnalysisSettings,
        state: State<AppState>,
    ) -> Result<(), String> {
        state
            .settings
            .update_analysis(settings)
            .map_err(|e| e.to_string())
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        // Initialize logging (reads RUST_LOG env var)
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("VoiceMood starting up...");

        tauri::Builder::default()
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let app_data_dir = app
                        .path()
                        .app_data_dir()
                        .map_err(|err| anyhow::anyhow!(err))?;
                    std::fs::create_dir_all(&app_data_dir)?;

                    let database = Database::new(app_data_dir.join("voicemood.sqlite3"))?;
                    let settings = SettingsStore::new(app_data_dir.join("settings.json"))?;

                    let journal = tauri::async_runtime::block_on(MoodJournal::load(
                        database.clone(),
                        EmotionSampler::default(),
                    ))?;
                    let auth = AuthService::new(database);

                    app.manage(AppState {
                        journal,
                        auth,
                        settings,
                    });

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                analyze_recording,
                get_current_emotion,
                get_history,
                clear_history,
                get_trend,
                get_dashboard,
                export_history,
                get_suggestions,
                list_emotions,
                signup,
                login,
                logout,
                get_current_user,
                get_analysis_settings,
                set_analysis_settings,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}

#[cfg(feature = "desktop")]
pub(crate) use desktop::AppState;
