//! MindConnect view layer
//!
//! Pure state machines for the page router, the overlay modals and the
//! single-slot alert banner. Every transition returns the [`Intent`]s a
//! renderer needs to apply; nothing here touches a real UI.

mod alert;
mod intent;
mod modal;
mod model;
mod router;

pub use alert::{Alert, AlertId, AlertKind, AlertPresenter, DEFAULT_ALERT_TTL};
pub use intent::{Confirmation, FormId, Intent};
pub use modal::{ModalController, ModalId};
pub use model::ViewModel;
pub use router::{NavEntry, Router, ViewSpec, DEFAULT_VIEWS};
