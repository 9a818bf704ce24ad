use super::*;

use test_utils::factory::gift_code::GiftCodeFactory;

/// Tests the code uniqueness pre-check.
///
/// Expected: Ok(true) for a stored code, Ok(false) otherwise
#[tokio::test]
async fn reports_existing_and_missing_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GiftCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiftCodeFactory::new(db).code("WELCOME2026").build().await?;

    let repo = GiftCodeRepository::new(db);
    assert!(repo.exists_by_code("WELCOME2026").await?);
    assert!(!repo.exists_by_code("UNKNOWN").await?);

    Ok(())
}
