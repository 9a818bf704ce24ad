use super::*;

use chrono::{NaiveTime, Utc};
use test_utils::factory::sleep_session::SleepSessionFactory;

/// Tests the dashboard's today-session counter.
///
/// Verifies that only sessions dated at or after the cutoff are counted.
///
/// Expected: one of two sessions counted with a midnight cutoff
#[tokio::test]
async fn counts_sessions_at_or_after_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_account(db).await?;
    SleepSessionFactory::new(db).account_id(owner.id).build().await?;
    SleepSessionFactory::new(db)
        .account_id(owner.id)
        .days_ago(5)
        .build()
        .await?;

    let today_start = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();

    let repo = SleepSessionRepository::new(db);
    assert_eq!(repo.count_since(today_start).await?, 1);
    assert_eq!(repo.count_all().await?, 2);

    Ok(())
}
