//! MindConnect domain store
//!
//! This crate holds the session's domain records (the active user profile,
//! registrations, check-ins and support connections) in an explicit
//! in-memory [`Repository`], and derives the dashboard figures from it.

mod dashboard;
mod error;
mod models;
mod repository;

pub use dashboard::{compute, days_between, DashboardMetrics};
pub use error::StoreError;
pub use models::{
    CheckinRecord, Consent, MoodScore, SupportCategory, SupportConnection, UrgencyLevel,
    UserProfile,
};
pub use repository::{Repository, SessionSnapshot};
