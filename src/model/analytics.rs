//! Windowed sleep analytics aggregation.
//!
//! `SleepAnalytics::compute` is a pure function of the fetched session list, the
//! requested period, and the current time. All database access happens before it
//! runs, which keeps the aggregation unit-testable without a connection.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::{
    dto::analytics::{AnalyticsDto, DailyTrendDto, StageDistributionDto},
    model::session::SleepSession,
};

/// Number of trailing calendar days covered by the daily trend, today inclusive.
const TREND_DAYS: i64 = 7;

const INSIGHT_SHORT_DURATION: &str = "Consider aiming for 7-9 hours of sleep for optimal health";
const INSIGHT_LOW_QUALITY: &str =
    "Your sleep quality can be improved. Try maintaining a consistent sleep schedule";
const INSIGHT_INCONSISTENT: &str =
    "Your sleep schedule appears inconsistent. Try going to bed at the same time each night";
const INSIGHT_SNORING: &str = "Frequent snoring detected. Consider consulting a sleep specialist";
const INSIGHT_FALLBACK: &str = "Great job! Your sleep patterns look healthy and consistent.";

/// Analytics window length.
///
/// Unrecognized period strings silently fall back to thirty days rather than
/// failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    SevenDays,
    ThirtyDays,
    NinetyDays,
}

impl Period {
    /// Parses a period query value, defaulting to thirty days.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("7d") => Self::SevenDays,
            Some("90d") => Self::NinetyDays,
            _ => Self::ThirtyDays,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::NinetyDays => "90d",
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
        }
    }

    /// Start of the inclusive window `[now - period, now]`.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

/// Total hours spent in each sleep stage across the window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageDistribution {
    pub light: f64,
    pub deep: f64,
    pub rem: f64,
}

impl StageDistribution {
    pub fn into_dto(self) -> StageDistributionDto {
        StageDistributionDto {
            light: self.light,
            deep: self.deep,
            rem: self.rem,
        }
    }
}

/// Per-day aggregate for the trailing trend.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrend {
    pub date: String,
    pub sessions: u64,
    pub avg_duration: f64,
    pub avg_quality: f64,
}

impl DailyTrend {
    pub fn into_dto(self) -> DailyTrendDto {
        DailyTrendDto {
            date: self.date,
            sessions: self.sessions,
            avg_duration: self.avg_duration,
            avg_quality: self.avg_quality,
        }
    }
}

/// Aggregated analytics over one owner's sessions in a window.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepAnalytics {
    pub period: Period,
    pub total_sessions: u64,
    pub total_sleep_hours: f64,
    pub avg_sleep_duration: f64,
    pub avg_sleep_quality: f64,
    pub stage_distribution: StageDistribution,
    pub sound_stats: BTreeMap<String, u64>,
    pub daily_trend: Vec<DailyTrend>,
    pub insights: Vec<String>,
}

impl SleepAnalytics {
    /// Computes analytics over the given sessions.
    ///
    /// `sessions` must already be filtered to the owner and window, ordered
    /// oldest-first; the insight heuristics read the most recent entries from
    /// the tail. Hours and durations are rounded to two decimal places,
    /// qualities to one.
    ///
    /// # Arguments
    /// - `sessions` - In-window sessions, oldest first
    /// - `period` - Window the sessions were fetched for
    /// - `now` - Current time anchoring the seven-day trend
    ///
    /// # Returns
    /// - `SleepAnalytics` - Aggregates, per-day trend, and insights
    pub fn compute(sessions: &[SleepSession], period: Period, now: DateTime<Utc>) -> Self {
        let total_sessions = sessions.len() as u64;
        let total_hours: f64 = sessions.iter().map(|s| s.duration).sum();

        let (avg_duration, avg_quality) = if sessions.is_empty() {
            (0.0, 0.0)
        } else {
            let count = sessions.len() as f64;
            let quality_sum: f64 = sessions.iter().map(|s| s.quality).sum();
            (total_hours / count, quality_sum / count)
        };

        let stage_distribution = StageDistribution {
            light: round2(sessions.iter().map(|s| s.stages.light).sum()),
            deep: round2(sessions.iter().map(|s| s.stages.deep).sum()),
            rem: round2(sessions.iter().map(|s| s.stages.rem).sum()),
        };

        let mut sound_stats: BTreeMap<String, u64> = BTreeMap::new();
        for session in sessions {
            for label in &session.sounds_detected {
                *sound_stats.entry(label.clone()).or_insert(0) += 1;
            }
        }

        Self {
            period,
            total_sessions,
            total_sleep_hours: round2(total_hours),
            avg_sleep_duration: round2(avg_duration),
            avg_sleep_quality: round1(avg_quality),
            stage_distribution,
            sound_stats,
            daily_trend: daily_trend(sessions, now),
            insights: insights(sessions, avg_duration, avg_quality),
        }
    }

    /// Converts the analytics domain model to a DTO for API responses.
    pub fn into_dto(self) -> AnalyticsDto {
        AnalyticsDto {
            period: self.period.as_str().to_string(),
            total_sessions: self.total_sessions,
            total_sleep_hours: self.total_sleep_hours,
            avg_sleep_duration: self.avg_sleep_duration,
            avg_sleep_quality: self.avg_sleep_quality,
            stage_distribution: self.stage_distribution.into_dto(),
            sound_stats: self.sound_stats,
            daily_trend: self.daily_trend.into_iter().map(DailyTrend::into_dto).collect(),
            insights: self.insights,
        }
    }
}

/// Builds the fixed seven-day trailing trend, oldest day first.
///
/// Sessions are matched to calendar days by date-only equality against the
/// session's `date` field.
fn daily_trend(sessions: &[SleepSession], now: DateTime<Utc>) -> Vec<DailyTrend> {
    (0..TREND_DAYS)
        .map(|offset| {
            let day = (now - Duration::days(TREND_DAYS - 1 - offset)).date_naive();
            let day_sessions: Vec<&SleepSession> = sessions
                .iter()
                .filter(|s| s.date.date_naive() == day)
                .collect();

            let (avg_duration, avg_quality) = if day_sessions.is_empty() {
                (0.0, 0.0)
            } else {
                let count = day_sessions.len() as f64;
                let duration_sum: f64 = day_sessions.iter().map(|s| s.duration).sum();
                let quality_sum: f64 = day_sessions.iter().map(|s| s.quality).sum();
                (duration_sum / count, quality_sum / count)
            };

            DailyTrend {
                date: day.format("%Y-%m-%d").to_string(),
                sessions: day_sessions.len() as u64,
                avg_duration: round2(avg_duration),
                avg_quality: round1(avg_quality),
            }
        })
        .collect()
}

/// Derives ordered heuristic insights from the window's aggregates.
///
/// With zero sessions there is nothing to diagnose, so only the positive
/// fallback is returned. Otherwise every applicable insight is emitted in a
/// fixed order, with the fallback reserved for the case where none apply.
fn insights(sessions: &[SleepSession], avg_duration: f64, avg_quality: f64) -> Vec<String> {
    if sessions.is_empty() {
        return vec![INSIGHT_FALLBACK.to_string()];
    }

    let mut insights = Vec::new();

    if avg_duration < 7.0 {
        insights.push(INSIGHT_SHORT_DURATION.to_string());
    }

    if avg_quality < 70.0 {
        insights.push(INSIGHT_LOW_QUALITY.to_string());
    }

    // Consistency over the most recent seven or fewer sessions.
    let recent = &sessions[sessions.len().saturating_sub(7)..];
    let consistent = recent.iter().filter(|s| s.duration >= 6.0).count() as f64 / recent.len() as f64;
    if consistent < 0.7 {
        insights.push(INSIGHT_INCONSISTENT.to_string());
    }

    let snoring_labels = sessions
        .iter()
        .flat_map(|s| &s.sounds_detected)
        .filter(|label| label.to_lowercase().contains("snoring"))
        .count();
    if snoring_labels as f64 > sessions.len() as f64 * 0.3 {
        insights.push(INSIGHT_SNORING.to_string());
    }

    if insights.is_empty() {
        vec![INSIGHT_FALLBACK.to_string()]
    } else {
        insights
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
