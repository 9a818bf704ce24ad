use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{error::AppError, service::ai::AiService};

fn encoded(len: usize) -> String {
    STANDARD.encode(vec![0u8; len])
}

/// Tests the missing-payload validation.
///
/// Expected: absent and empty payloads both fail with the required message
#[test]
fn rejects_missing_audio() {
    for payload in [None, Some(String::new())] {
        let err = AiService::analyze(payload).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Audio data is required"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

/// Tests the base64 validation.
///
/// Expected: undecodable payloads fail with the invalid-data message
#[test]
fn rejects_invalid_base64() {
    let err = AiService::analyze(Some("!!! not base64 !!!".to_string())).unwrap_err();
    match err {
        AppError::Validation(msg) => assert_eq!(msg, "Invalid audio data"),
        other => panic!("unexpected error: {other}"),
    }
}

/// Tests that the analysis is a pure function of the payload.
///
/// Expected: identical uploads produce identical reports
#[test]
fn analysis_is_deterministic() {
    let payload = encoded(1234);

    let first = AiService::analyze(Some(payload.clone())).unwrap();
    let second = AiService::analyze(Some(payload)).unwrap();

    assert_eq!(first, second);
}

/// Tests the derived probabilities and stage for a known payload length.
///
/// A 250-byte recording sits below every recommendation threshold.
///
/// Expected: deep stage, no detections, no recommendations
#[test]
fn derives_quiet_report_for_short_recording() {
    let analysis = AiService::analyze(Some(encoded(250))).unwrap();

    assert_eq!(analysis.sleep_stage, "deep");
    assert_eq!(analysis.snoring_probability, 0.25);
    assert!(!analysis.snoring_detected);
    assert_eq!(analysis.coughing_probability, 0.31);
    assert!(!analysis.coughing_detected);
    assert_eq!(analysis.movement_level, 0.5);
    assert!(analysis.recommendations.is_empty());
}

/// Tests the recommendation thresholds for a noisy recording.
///
/// 900 bytes pushes snoring over 0.8 and movement over 0.7, and lands on the
/// light stage.
///
/// Expected: snoring detected plus three recommendations in order
#[test]
fn recommends_for_noisy_recording() {
    let analysis = AiService::analyze(Some(encoded(900))).unwrap();

    assert_eq!(analysis.sleep_stage, "light");
    assert!(analysis.snoring_detected);
    assert_eq!(analysis.snoring_probability, 0.9);
    assert_eq!(
        analysis.recommendations,
        vec![
            "Consider side sleeping to reduce snoring".to_string(),
            "Try relaxation techniques before bed".to_string(),
            "Maintain consistent sleep schedule".to_string(),
        ]
    );
}

/// Tests the stage cycle over the byte length.
///
/// Expected: stages advance every hundred bytes and wrap after four
#[test]
fn stage_cycles_with_length() {
    let stage = |len: usize| AiService::analyze(Some(encoded(len))).unwrap().sleep_stage;

    assert_eq!(stage(50), "awake");
    assert_eq!(stage(150), "light");
    assert_eq!(stage(250), "deep");
    assert_eq!(stage(350), "rem");
    assert_eq!(stage(450), "awake");
}
