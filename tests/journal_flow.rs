use std::{path::PathBuf, time::Duration};

use chrono::{Local, Utc};
use uuid::Uuid;
use voicemood_lib::{
    history::{export_records, query_history, HistoryQuery, SortKey},
    suggestions::{suggestions_for, DEFAULT_SUGGESTIONS},
    AuthError, AuthService, Database, Emotion, EmotionSample, EmotionSampler, MoodJournal, Trend,
};

fn temp_db_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("voicemood-flow-{}", Uuid::new_v4()))
        .join("voicemood.sqlite3")
}

#[tokio::test]
async fn journal_and_accounts_share_a_sqlite_store() {
    let path = temp_db_path();
    let db = Database::new(path.clone()).unwrap();

    let auth = AuthService::new(db.clone());
    let user = auth
        .signup("mira@example.com", "s3cret", "Mira")
        .await
        .unwrap();
    assert!(matches!(
        auth.signup("mira@example.com", "again", "Mira").await,
        Err(AuthError::EmailTaken)
    ));

    let journal = MoodJournal::load(db.clone(), EmotionSampler::default())
        .await
        .unwrap();
    for label in [Emotion::Sad, Emotion::Angry, Emotion::Fearful] {
        journal
            .record(EmotionSample::new(label, 70, Utc::now()))
            .await
            .unwrap();
    }
    assert_eq!(journal.trend().await, Trend::Declining);

    let analyzed = journal.analyze(Duration::ZERO).await.unwrap();
    assert!((65..=95).contains(&analyzed.confidence));
    assert_eq!(journal.current().await, Some(analyzed.clone()));

    drop(journal);
    drop(auth);
    drop(db);

    let db = Database::new(path.clone()).unwrap();
    let auth = AuthService::new(db.clone());
    assert_eq!(auth.current_user().await.unwrap(), Some(user.clone()));
    auth.logout().await.unwrap();
    assert_eq!(auth.login("mira@example.com", "s3cret").await.unwrap(), user);

    let journal = MoodJournal::load(db.clone(), EmotionSampler::default())
        .await
        .unwrap();
    let history = journal.history().await;
    assert_eq!(history.len(), 4);
    assert_eq!(history.latest(), Some(&analyzed));

    let overview = journal.overview(Local::now().date_naive()).await;
    assert_eq!(overview.stats.total, 4);
    assert_eq!(overview.current, None);

    let sad_only = query_history(
        history.entries(),
        &HistoryQuery {
            emotion: Some(Emotion::Sad),
            sort_by: SortKey::Date,
        },
    );
    assert!(!sad_only.is_empty());
    assert!(sad_only.iter().all(|sample| sample.label == Emotion::Sad));
    assert_eq!(export_records(history.entries()).len(), 4);

    journal.clear().await.unwrap();
    let reloaded = MoodJournal::load(db.clone(), EmotionSampler::default())
        .await
        .unwrap();
    assert!(reloaded.history().await.is_empty());

    drop((reloaded, journal, auth, db));
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn suggestions_follow_the_latest_label() {
    assert_ne!(suggestions_for(Emotion::Sad), &DEFAULT_SUGGESTIONS);
    assert_eq!(suggestions_for(Emotion::Surprised), &DEFAULT_SUGGESTIONS);
}
