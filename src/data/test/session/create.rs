use super::*;

use chrono::Utc;
use entity::sleep_session::SoundLabels;

use crate::model::session::{CreateSleepSessionRecord, StageBreakdown};

/// Tests inserting a fully resolved session row.
///
/// Verifies that all fields round-trip through the entity layer, including
/// the JSON-encoded sound labels and the stage breakdown.
///
/// Expected: Ok with every field as inserted
#[tokio::test]
async fn stores_all_session_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let now = Utc::now();

    let session = SleepSessionRepository::new(db)
        .create(CreateSleepSessionRecord {
            account_id: account.id,
            duration: 7.5,
            quality: 85.0,
            sleep_score: 8,
            stages: StageBreakdown {
                light: 4.0,
                deep: 2.0,
                rem: 1.5,
            },
            sounds_detected: SoundLabels(vec!["snoring".to_string(), "rain".to_string()]),
            date: now,
            started_at: now,
            ended_at: now,
            notes: "slept well".to_string(),
        })
        .await?;

    assert_eq!(session.account_id, account.id);
    assert_eq!(session.duration, 7.5);
    assert_eq!(session.quality, 85.0);
    assert_eq!(session.sleep_score, 8);
    assert_eq!(session.stages.light, 4.0);
    assert_eq!(session.stages.deep, 2.0);
    assert_eq!(session.stages.rem, 1.5);
    assert_eq!(session.sounds_detected, vec!["snoring", "rain"]);
    assert_eq!(session.notes, "slept well");

    Ok(())
}
