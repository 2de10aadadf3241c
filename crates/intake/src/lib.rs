//! MindConnect form intake
//!
//! Turns submitted form fields into domain records, sends them through a
//! [`SubmissionBackend`] with a timeout and retry policy, and tracks the
//! Idle → Submitting → Settled state of each form.

mod backend;
mod dispatch;
mod error;
mod forms;
mod pipeline;

pub use backend::{Receipt, SimulatedBackend, SimulatedLatency, Submission, SubmissionBackend};
pub use dispatch::{Dispatch, RetryPolicy};
pub use error::{BackendError, IntakeError};
pub use forms::{
    extract_checkin, extract_registration, extract_support_query, fields,
    urgency_requires_escalation, FormData, SupportQuery,
};
pub use pipeline::{FormState, FormTracker};
