use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Total hours spent in each sleep stage across the analytics window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StageDistributionDto {
    pub light: f64,
    pub deep: f64,
    pub rem: f64,
}

/// Per-day aggregate for the fixed seven-day trailing trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrendDto {
    /// Calendar day in `YYYY-MM-DD` form.
    pub date: String,
    pub sessions: u64,
    pub avg_duration: f64,
    pub avg_quality: f64,
}

/// Aggregated analytics over the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDto {
    /// Window the aggregates cover: `7d`, `30d`, or `90d`.
    pub period: String,
    pub total_sessions: u64,
    pub total_sleep_hours: f64,
    pub avg_sleep_duration: f64,
    pub avg_sleep_quality: f64,
    pub stage_distribution: StageDistributionDto,
    /// Frequency of each detected-sound label across the window.
    pub sound_stats: BTreeMap<String, u64>,
    /// Seven trailing calendar days, oldest first, today inclusive.
    pub daily_trend: Vec<DailyTrendDto>,
    pub insights: Vec<String>,
}

/// Response body for the analytics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponseDto {
    pub success: bool,
    pub analytics: AnalyticsDto,
}
