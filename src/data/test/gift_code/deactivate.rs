use super::*;

use test_utils::factory::gift_code::GiftCodeFactory;

/// Tests deactivating a stored code.
///
/// Expected: Ok(Some) with active false, and the stored row flipped
#[tokio::test]
async fn deactivates_stored_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GiftCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiftCodeFactory::new(db).code("WELCOME2026").build().await?;

    let repo = GiftCodeRepository::new(db);
    let deactivated = repo.deactivate("WELCOME2026").await?.unwrap();
    assert!(!deactivated.active);

    let listed = repo.list_all().await?;
    assert!(!listed[0].active);

    Ok(())
}

/// Tests deactivating an unknown code.
///
/// Expected: Ok(None), nothing written
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GiftCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GiftCodeRepository::new(db).deactivate("UNKNOWN").await?;
    assert!(result.is_none());

    Ok(())
}
