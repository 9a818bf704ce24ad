use super::*;

use test_utils::factory::gift_code::GiftCodeFactory;

/// Tests the admin gift code listing.
///
/// Expected: every stored code is returned, including inactive ones
#[tokio::test]
async fn lists_all_codes_including_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GiftCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiftCodeFactory::new(db).code("ACTIVE1").build().await?;
    GiftCodeFactory::new(db).code("RETIRED").active(false).build().await?;

    let codes = GiftCodeRepository::new(db).list_all().await?;

    assert_eq!(codes.len(), 2);
    assert!(codes.iter().any(|c| c.code == "RETIRED" && !c.active));

    Ok(())
}
