use log::trace;
use mindconnect_views::FormId;
use std::collections::HashMap;

use crate::error::IntakeError;

/// Submission state of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Settled,
}

/// Per-form submission states
#[derive(Debug, Clone, Default)]
pub struct FormTracker {
    states: HashMap<FormId, FormState>,
}

impl FormTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, form: FormId) -> FormState {
        self.states.get(&form).copied().unwrap_or_default()
    }

    /// Idle/Settled → Submitting. A form already submitting is refused.
    pub fn begin(&mut self, form: FormId) -> Result<(), IntakeError> {
        if self.state(form) == FormState::Submitting {
            return Err(IntakeError::Busy(form));
        }
        self.transition(form, FormState::Submitting);
        Ok(())
    }

    pub fn settle(&mut self, form: FormId) {
        self.transition(form, FormState::Settled);
    }

    /// Back to Idle after a failed submission
    pub fn fail(&mut self, form: FormId) {
        self.transition(form, FormState::Idle);
    }

    fn transition(&mut self, form: FormId, next: FormState) {
        let previous = self.states.insert(form, next).unwrap_or_default();
        trace!("{} form: {:?} -> {:?}", form, previous, next);
    }
}
