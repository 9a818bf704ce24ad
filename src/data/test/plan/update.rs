use super::*;

use test_utils::factory::subscription_plan::SubscriptionPlanFactory;

/// Tests the partial plan update.
///
/// Verifies that only the provided fields change and everything else keeps
/// its stored value.
///
/// Expected: price updated, name and duration untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = SubscriptionPlanFactory::new(db)
        .name("Premium")
        .price(9.99)
        .duration("monthly")
        .build()
        .await?;

    let updated = PlanRepository::new(db)
        .update(
            entity.id,
            UpdatePlanParams {
                price: Some(12.99),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 12.99);
    assert_eq!(updated.name, "Premium");
    assert_eq!(updated.duration, "monthly");

    Ok(())
}

/// Tests updating a nonexistent plan.
///
/// Expected: Ok(None), nothing written
#[tokio::test]
async fn returns_none_for_unknown_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlanRepository::new(db)
        .update(
            9999,
            UpdatePlanParams {
                price: Some(1.0),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
