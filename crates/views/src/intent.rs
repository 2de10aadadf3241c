use mindconnect_store::DashboardMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alert::{Alert, AlertId};
use crate::modal::ModalId;

/// Forms whose submission goes through the intake pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormId {
    Registration,
    SupportSearch,
    Checkin,
}

impl FormId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormId::Registration => "registration",
            FormId::SupportSearch => "support search",
            FormId::Checkin => "check-in",
        }
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Questions the host must put to the user before the controller proceeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    /// Urgent need declared on the registration form; offer crisis support now
    CrisisEscalation,
    /// About to dial the crisis line
    DialCrisisLine,
}

impl Confirmation {
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirmation::CrisisEscalation => {
                "You indicated you need immediate help. Would you like to connect with crisis support resources right now?"
            }
            Confirmation::DialCrisisLine => {
                "This will call the Suicide & Crisis Lifeline. Continue?"
            }
        }
    }
}

/// A UI update for the renderer to apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Deactivate every view, activate `view`, highlight `nav` (or nothing)
    ActivateView { view: String, nav: Option<String> },
    SetMobileMenu { open: bool },
    ScrollToTop,
    OpenModal { modal: ModalId },
    CloseModal { modal: ModalId },
    /// Insert `alert` as the first child of the container of `view`
    ShowAlert { alert: Alert, view: Option<String> },
    DismissAlert { id: AlertId },
    SetLoading { form: FormId, loading: bool },
    ResetForm { form: FormId },
    RefreshDashboard { metrics: DashboardMetrics },
    Confirm { confirmation: Confirmation },
    /// Navigate to a `tel:` link
    Dial { uri: String },
}
