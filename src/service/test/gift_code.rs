use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{gift_code::GiftCodeFactory, subscription_plan::SubscriptionPlanFactory},
};

use crate::{
    data::gift_code::GiftCodeRepository, error::AppError, model::gift_code::CreateGiftCodeParams,
    service::gift_code::GiftCodeService,
};

fn create_params(code: &str, plan_id: i32) -> CreateGiftCodeParams {
    CreateGiftCodeParams {
        code: Some(code.to_string()),
        plan_id: Some(plan_id),
        expires_at: None,
        max_uses: 1,
        description: String::new(),
    }
}

/// Tests creating a gift code.
///
/// The code is stored uppercase and the plan's name is snapshotted onto it.
///
/// Expected: uppercase code carrying the plan name
#[tokio::test]
async fn creates_code_with_plan_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscription_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = SubscriptionPlanFactory::new(db).name("Premium Yearly").build().await?;

    let gift_code = GiftCodeService::new(db)
        .create(create_params("welcome2026", plan.id))
        .await
        .unwrap();

    assert_eq!(gift_code.code, "WELCOME2026");
    assert_eq!(gift_code.plan_id, plan.id);
    assert_eq!(gift_code.plan_name, "Premium Yearly");
    assert!(gift_code.active);
    assert_eq!(gift_code.used_count, 0);

    Ok(())
}

/// Tests creating a code against a missing plan.
///
/// The plan lookup happens before any write, so a failed creation leaves no
/// partial row behind.
///
/// Expected: not-found error and an empty code table
#[tokio::test]
async fn rejects_unknown_plan_without_writing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscription_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = GiftCodeService::new(db)
        .create(create_params("ORPHAN", 9999))
        .await
        .unwrap_err();

    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "Subscription plan not found"),
        other => panic!("unexpected error: {other}"),
    }

    assert!(GiftCodeRepository::new(db).list_all().await?.is_empty());

    Ok(())
}

/// Tests the missing-field validation.
///
/// Expected: validation error with the combined field message
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscription_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = GiftCodeService::new(db)
        .create(CreateGiftCodeParams {
            code: None,
            ..create_params("", 1)
        })
        .await
        .unwrap_err();

    match err {
        AppError::Validation(msg) => assert_eq!(msg, "Code and plan ID are required"),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

/// Tests the unique-code rule, case-insensitively.
///
/// Expected: conflict error; the stored code keeps its original plan name
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscription_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = SubscriptionPlanFactory::new(db).name("Premium").build().await?;

    let service = GiftCodeService::new(db);
    service.create(create_params("LAUNCH", plan.id)).await.unwrap();

    let err = service
        .create(create_params("launch", plan.id))
        .await
        .unwrap_err();

    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "Gift code already exists"),
        other => panic!("unexpected error: {other}"),
    }

    let codes = GiftCodeRepository::new(db).list_all().await?;
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].plan_name, "Premium");

    Ok(())
}

/// Tests deactivating a code by its lowercase form.
///
/// Expected: the stored code flips inactive; unknown codes map to not-found
#[tokio::test]
async fn deactivates_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscription_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GiftCodeFactory::new(db).code("SPRING").build().await?;

    let service = GiftCodeService::new(db);

    let deactivated = service.deactivate("spring").await.unwrap();
    assert!(!deactivated.active);

    let err = service.deactivate("MISSING").await.unwrap_err();
    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "Gift code not found"),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}
