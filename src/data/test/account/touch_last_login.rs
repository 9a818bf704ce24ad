use super::*;

use test_utils::factory::account::AccountFactory;

/// Tests refreshing the last login timestamp.
///
/// Expected: the stored timestamp moves forward from the factory value
#[tokio::test]
async fn refreshes_last_login_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = AccountFactory::new(db).build().await?;
    let repo = AccountRepository::new(db);

    let before = repo.find_by_id(entity.id).await?.unwrap().last_login_at;

    repo.touch_last_login(entity.id).await?;

    let after = repo.find_by_id(entity.id).await?.unwrap().last_login_at;
    assert!(after >= before);

    Ok(())
}

/// Tests touching a nonexistent account.
///
/// Expected: Ok with no rows affected
#[tokio::test]
async fn is_a_no_op_for_unknown_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccountRepository::new(db).touch_last_login(424242).await;
    assert!(result.is_ok());

    Ok(())
}
