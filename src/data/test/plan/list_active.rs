use super::*;

use test_utils::factory::subscription_plan::SubscriptionPlanFactory;

/// Tests the public plan listing.
///
/// Verifies that inactive plans are excluded and active plans come back
/// cheapest first.
///
/// Expected: two active plans ordered by price ascending
#[tokio::test]
async fn lists_active_plans_cheapest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriptionPlanFactory::new(db)
        .name("Yearly")
        .price(59.99)
        .build()
        .await?;
    SubscriptionPlanFactory::new(db)
        .name("Monthly")
        .price(9.99)
        .build()
        .await?;
    SubscriptionPlanFactory::new(db)
        .name("Legacy")
        .price(4.99)
        .active(false)
        .build()
        .await?;

    let repo = PlanRepository::new(db);
    let plans = repo.list_active().await?;

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Monthly");
    assert_eq!(plans[1].name, "Yearly");

    assert_eq!(repo.count_active().await?, 2);

    Ok(())
}
