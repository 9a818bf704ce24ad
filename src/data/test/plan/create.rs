use super::*;

/// Tests inserting a subscription plan.
///
/// Expected: Ok with all fields as inserted, including the JSON feature list
#[tokio::test]
async fn stores_all_plan_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = PlanRepository::new(db)
        .create(CreatePlanRecord {
            name: "Premium".to_string(),
            description: "Advanced tracking".to_string(),
            price: 9.99,
            duration: "monthly".to_string(),
            features: vec!["Unlimited history".to_string(), "AI analysis".to_string()],
            active: true,
        })
        .await?;

    assert_eq!(plan.name, "Premium");
    assert_eq!(plan.description, "Advanced tracking");
    assert_eq!(plan.price, 9.99);
    assert_eq!(plan.duration, "monthly");
    assert_eq!(plan.features, vec!["Unlimited history", "AI analysis"]);
    assert!(plan.active);

    Ok(())
}
