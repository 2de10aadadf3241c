//! Dashboard figures derived from the repository

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::Repository;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Figures shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Whole days since the active profile registered
    pub days_joined: i64,

    /// Declared support preferences plus recorded connections
    pub connections: usize,

    pub checkins: usize,
}

/// Whole days elapsed from `from` to `to`, rounded toward negative infinity
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Recompute the dashboard for the active profile.
///
/// Returns `None` while nobody is registered.
pub fn compute(repo: &Repository, now: DateTime<Utc>) -> Option<DashboardMetrics> {
    let profile = repo.active_profile()?;
    Some(DashboardMetrics {
        days_joined: days_between(profile.registered_at, now),
        connections: profile.support_preferences.len() + repo.connections().len(),
        checkins: repo.checkins().len(),
    })
}
