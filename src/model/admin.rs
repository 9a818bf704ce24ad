//! Admin-facing aggregate models.

use crate::dto::admin::DashboardStatsDto;

/// Per-tier account counts for the admin user listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserTierCounts {
    pub total: u64,
    pub premium: u64,
    pub free: u64,
}

/// Premium split of the sound library for the admin sound listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundLibraryCounts {
    pub total: u64,
    pub premium: u64,
    pub free: u64,
}

/// Aggregate counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub premium_users: u64,
    pub total_sessions: u64,
    pub today_sessions: u64,
    pub active_sounds: u64,
    pub active_plans: u64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_users: self.total_users,
            premium_users: self.premium_users,
            total_sessions: self.total_sessions,
            today_sessions: self.today_sessions,
            active_sounds: self.active_sounds,
            active_plans: self.active_plans,
        }
    }
}
