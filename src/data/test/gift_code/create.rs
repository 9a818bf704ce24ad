use super::*;

/// Tests inserting a gift code.
///
/// Verifies that new codes start active with zero uses and keep the plan
/// name snapshot.
///
/// Expected: Ok with active code, zero uses, and snapshotted plan name
#[tokio::test]
async fn stores_code_active_with_zero_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GiftCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gift_code = GiftCodeRepository::new(db)
        .create(CreateGiftCodeRecord {
            code: "WELCOME2026".to_string(),
            plan_id: 1,
            plan_name: "Premium".to_string(),
            expires_at: None,
            max_uses: 5,
            description: "Launch promotion".to_string(),
        })
        .await?;

    assert_eq!(gift_code.code, "WELCOME2026");
    assert_eq!(gift_code.plan_name, "Premium");
    assert_eq!(gift_code.max_uses, 5);
    assert_eq!(gift_code.used_count, 0);
    assert!(gift_code.active);

    Ok(())
}
