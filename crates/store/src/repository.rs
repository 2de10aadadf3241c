//! In-memory repository for one session

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::models::{CheckinRecord, SupportConnection, UserProfile};

/// Session-scoped collections of domain records.
///
/// At most one profile is active at a time. Every other collection is
/// append-only; records are never mutated or removed once stored.
#[derive(Debug, Default, Clone)]
pub struct Repository {
    active: Option<UserProfile>,
    registrations: Vec<UserProfile>,
    checkins: Vec<CheckinRecord>,
    connections: Vec<SupportConnection>,
}

/// Serializable copy of a [`Repository`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub active_profile: Option<UserProfile>,
    pub registrations: Vec<UserProfile>,
    pub checkins: Vec<CheckinRecord>,
    pub connections: Vec<SupportConnection>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `profile` the active user and append it to the registrations log
    pub fn register(&mut self, profile: UserProfile) {
        if let Some(previous) = &self.active {
            debug!("Replacing active profile {} with {}", previous.id, profile.id);
        }
        info!("Registered profile {}", profile.id);
        self.registrations.push(profile.clone());
        self.active = Some(profile);
    }

    /// Install a profile as active without logging it as a new registration
    pub fn set_active_profile(&mut self, profile: UserProfile) {
        self.active = Some(profile);
    }

    pub fn active_profile(&self) -> Option<&UserProfile> {
        self.active.as_ref()
    }

    pub fn registrations(&self) -> &[UserProfile] {
        &self.registrations
    }

    pub fn append_checkin(&mut self, checkin: CheckinRecord) {
        debug!("Appending check-in {} (mood {})", checkin.id, checkin.mood.value());
        self.checkins.push(checkin);
    }

    pub fn checkins(&self) -> &[CheckinRecord] {
        &self.checkins
    }

    pub fn append_connection(&mut self, connection: SupportConnection) {
        debug!("Appending {} connection", connection.category);
        self.connections.push(connection);
    }

    pub fn connections(&self) -> &[SupportConnection] {
        &self.connections
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            active_profile: self.active.clone(),
            registrations: self.registrations.clone(),
            checkins: self.checkins.clone(),
            connections: self.connections.clone(),
        }
    }
}
