use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::account::create_account};

use crate::{
    data::account::AccountRepository,
    error::AppError,
    model::session::{CreateSleepSessionParams, StageBreakdown},
    service::session::SleepSessionService,
};

fn base_params() -> CreateSleepSessionParams {
    CreateSleepSessionParams {
        duration: Some(7.5),
        quality: Some(85.0),
        stages: StageBreakdown::default(),
        sounds_detected: Vec::new(),
        date: Some(Utc::now()),
        started_at: None,
        ended_at: None,
        notes: String::new(),
    }
}

/// Tests logging a session with quality omitted.
///
/// Quality defaults to `min(100, duration * 10)` and the score is the floored
/// tenth of it.
///
/// Expected: 6.5 hours yields quality 65 and score 6
#[tokio::test]
async fn defaults_quality_from_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let session = SleepSessionService::new(db)
        .create(
            account.id,
            CreateSleepSessionParams {
                duration: Some(6.5),
                quality: None,
                ..base_params()
            },
        )
        .await
        .unwrap();

    assert_eq!(session.quality, 65.0);
    assert_eq!(session.sleep_score, 6);

    Ok(())
}

/// Tests the quality default cap for long sessions.
///
/// Expected: 12 hours caps at quality 100, score 10
#[tokio::test]
async fn caps_defaulted_quality_at_one_hundred() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let session = SleepSessionService::new(db)
        .create(
            account.id,
            CreateSleepSessionParams {
                duration: Some(12.0),
                quality: None,
                ..base_params()
            },
        )
        .await
        .unwrap();

    assert_eq!(session.quality, 100.0);
    assert_eq!(session.sleep_score, 10);

    Ok(())
}

/// Tests the required-field validation.
///
/// Expected: missing duration or date both fail with the combined message
#[tokio::test]
async fn rejects_missing_duration_or_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let service = SleepSessionService::new(db);

    let missing_duration = CreateSleepSessionParams {
        duration: None,
        ..base_params()
    };
    let missing_date = CreateSleepSessionParams {
        date: None,
        ..base_params()
    };

    for params in [missing_duration, missing_date] {
        let err = service.create(account.id, params).await.unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Duration and date are required"),
            other => panic!("unexpected error: {other}"),
        }
    }

    Ok(())
}

/// Tests the range validation on quality and stages.
///
/// Expected: out-of-range quality and negative stages each get their message
#[tokio::test]
async fn rejects_out_of_range_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let service = SleepSessionService::new(db);

    let err = service
        .create(
            account.id,
            CreateSleepSessionParams {
                quality: Some(150.0),
                ..base_params()
            },
        )
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert_eq!(msg, "Quality must be between 0 and 100"),
        other => panic!("unexpected error: {other}"),
    }

    let err = service
        .create(
            account.id,
            CreateSleepSessionParams {
                duration: Some(0.0),
                ..base_params()
            },
        )
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert_eq!(msg, "Duration must be greater than 0"),
        other => panic!("unexpected error: {other}"),
    }

    let err = service
        .create(
            account.id,
            CreateSleepSessionParams {
                stages: StageBreakdown {
                    light: 4.0,
                    deep: -1.0,
                    rem: 1.5,
                },
                ..base_params()
            },
        )
        .await
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert_eq!(msg, "Sleep stages must be non-negative"),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

/// Tests that logging sessions advances the account counters.
///
/// The insert and the counter increments share a transaction, so after two
/// sessions the stored counters match the logged totals exactly.
///
/// Expected: count 2, total hours 14.0
#[tokio::test]
async fn increments_account_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let service = SleepSessionService::new(db);

    service
        .create(
            account.id,
            CreateSleepSessionParams {
                duration: Some(6.0),
                ..base_params()
            },
        )
        .await
        .unwrap();
    service
        .create(
            account.id,
            CreateSleepSessionParams {
                duration: Some(8.0),
                ..base_params()
            },
        )
        .await
        .unwrap();

    let stored = AccountRepository::new(db)
        .find_by_id(account.id)
        .await?
        .unwrap();

    assert_eq!(stored.sleep_sessions_count, 2);
    assert_eq!(stored.total_sleep_hours, 14.0);

    Ok(())
}

/// Tests the history listing through the service.
///
/// Expected: page of one with the account's full total
#[tokio::test]
async fn lists_history_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sleep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let service = SleepSessionService::new(db);

    for duration in [6.0, 7.0, 8.0] {
        service
            .create(
                account.id,
                CreateSleepSessionParams {
                    duration: Some(duration),
                    ..base_params()
                },
            )
            .await
            .unwrap();
    }

    let (page, total) = service.list(account.id, 1, 0).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(total, 3);

    Ok(())
}
