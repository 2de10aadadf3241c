//! Submission backend abstraction

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use mindconnect_store::{CheckinRecord, UserProfile};
use mindconnect_views::FormId;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

use crate::error::BackendError;
use crate::forms::SupportQuery;

/// A record on its way to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", content = "record", rename_all = "snake_case")]
pub enum Submission {
    Registration(UserProfile),
    SupportSearch(SupportQuery),
    Checkin(CheckinRecord),
}

impl Submission {
    pub fn form(&self) -> FormId {
        match self {
            Submission::Registration(_) => FormId::Registration,
            Submission::SupportSearch(_) => FormId::SupportSearch,
            Submission::Checkin(_) => FormId::Checkin,
        }
    }

    /// Id of the submitted record; searches are not stored and have none
    pub fn record_id(&self) -> Option<Uuid> {
        match self {
            Submission::Registration(profile) => Some(profile.id),
            Submission::SupportSearch(_) => None,
            Submission::Checkin(record) => Some(record.id),
        }
    }
}

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub form: FormId,
    pub accepted_at: DateTime<Utc>,
}

impl Receipt {
    pub fn now(form: FormId) -> Self {
        Self {
            form,
            accepted_at: Utc::now(),
        }
    }
}

/// Something that accepts form submissions
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<Receipt, BackendError>;
}

/// Per-form delay of the simulated backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub registration: Duration,
    pub support_search: Duration,
    pub checkin: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            registration: Duration::from_millis(2000),
            support_search: Duration::from_millis(1500),
            checkin: Duration::ZERO,
        }
    }
}

impl SimulatedLatency {
    pub fn for_form(&self, form: FormId) -> Duration {
        match form {
            FormId::Registration => self.registration,
            FormId::SupportSearch => self.support_search,
            FormId::Checkin => self.checkin,
        }
    }
}

/// Backend stand-in: waits for the configured latency and accepts everything
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    latency: SimulatedLatency,
}

impl SimulatedBackend {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, submission: &Submission) -> Result<Receipt, BackendError> {
        let form = submission.form();
        let delay = self.latency.for_form(form);
        debug!(
            "Simulating {} submission {:?} ({:?})",
            form,
            submission.record_id(),
            delay
        );
        if !delay.is_zero() {
            sleep(delay).await;
        }
        Ok(Receipt::now(form))
    }
}
