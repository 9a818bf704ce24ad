use super::*;

use test_utils::factory::subscription_plan::SubscriptionPlanFactory;

/// Tests the plan name uniqueness pre-check.
///
/// Expected: Ok(true) for a stored name, Ok(false) otherwise
#[tokio::test]
async fn reports_existing_and_missing_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SubscriptionPlanFactory::new(db).name("Premium").build().await?;

    let repo = PlanRepository::new(db);
    assert!(repo.exists_by_name("Premium").await?);
    assert!(!repo.exists_by_name("Enterprise").await?);

    Ok(())
}
