use super::*;

use test_utils::factory::sleep_session::SleepSessionFactory;

/// Tests the owner-scoped listing.
///
/// Verifies that only the owner's sessions are returned, newest first, and
/// that the total counts the owner's sessions regardless of the page size.
///
/// Expected: two of three rows for the owner, ordered by date descending
#[tokio::test]
async fn returns_owner_sessions_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_account(db).await?;
    let other = create_account(db).await?;

    let old = SleepSessionFactory::new(db)
        .account_id(owner.id)
        .days_ago(3)
        .build()
        .await?;
    let recent = SleepSessionFactory::new(db)
        .account_id(owner.id)
        .days_ago(1)
        .build()
        .await?;
    SleepSessionFactory::new(db).account_id(other.id).build().await?;

    let (sessions, total) = SleepSessionRepository::new(db)
        .list_by_owner(owner.id, 50, 0)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, recent.id);
    assert_eq!(sessions[1].id, old.id);

    Ok(())
}

/// Tests offset pagination.
///
/// Expected: page of one starting after the newest session, total unchanged
#[tokio::test]
async fn paginates_with_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_account(db).await?;
    for days in 1..=3 {
        SleepSessionFactory::new(db)
            .account_id(owner.id)
            .days_ago(days)
            .build()
            .await?;
    }

    let (sessions, total) = SleepSessionRepository::new(db)
        .list_by_owner(owner.id, 1, 1)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(sessions.len(), 1);

    Ok(())
}
