//! Sleep audio analysis service.
//!
//! The analysis is derived deterministically from the decoded payload length,
//! so the same recording always yields the same report. No audio processing
//! happens here and no model is consulted.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{error::AppError, model::ai::SleepAudioAnalysis};

/// Service producing sleep audio analysis reports.
pub struct AiService;

impl AiService {
    /// Analyzes a base64-encoded audio recording.
    ///
    /// # Arguments
    /// - `audio_data` - Base64 payload from the request body
    ///
    /// # Returns
    /// - `Ok(SleepAudioAnalysis)` - Deterministic analysis of the recording
    /// - `Err(AppError::Validation)` - Missing or undecodable payload
    pub fn analyze(audio_data: Option<String>) -> Result<SleepAudioAnalysis, AppError> {
        let Some(audio_data) = audio_data.filter(|data| !data.is_empty()) else {
            return Err(AppError::Validation("Audio data is required".to_string()));
        };

        let decoded = STANDARD
            .decode(&audio_data)
            .map_err(|_| AppError::Validation("Invalid audio data".to_string()))?;

        Ok(SleepAudioAnalysis::from_audio_len(decoded.len()))
    }
}
