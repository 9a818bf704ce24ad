use super::*;

use chrono::{Duration, Utc};
use test_utils::factory::sleep_session::SleepSessionFactory;

/// Tests the analytics window fetch.
///
/// Verifies that only in-window sessions of the owner are returned, ordered
/// oldest first for the insight heuristics.
///
/// Expected: the two in-window rows, ascending by date
#[tokio::test]
async fn returns_in_window_sessions_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_account(db).await?;
    let other = create_account(db).await?;

    let outside = SleepSessionFactory::new(db)
        .account_id(owner.id)
        .days_ago(40)
        .build()
        .await?;
    let older = SleepSessionFactory::new(db)
        .account_id(owner.id)
        .days_ago(10)
        .build()
        .await?;
    let newer = SleepSessionFactory::new(db)
        .account_id(owner.id)
        .days_ago(2)
        .build()
        .await?;
    SleepSessionFactory::new(db).account_id(other.id).days_ago(2).build().await?;

    let now = Utc::now();
    let sessions = SleepSessionRepository::new(db)
        .find_in_window(owner.id, now - Duration::days(30), now)
        .await?;

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, older.id);
    assert_eq!(sessions[1].id, newer.id);
    assert!(sessions.iter().all(|s| s.id != outside.id));

    Ok(())
}
