//! Single-slot alert banner

use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::intent::Intent;

/// How long an alert stays up unless replaced
pub const DEFAULT_ALERT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Warning,
    Danger,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Success => f.write_str("success"),
            AlertKind::Warning => f.write_str("warning"),
            AlertKind::Danger => f.write_str("danger"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlertId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

/// Holds at most one alert. The latest call to [`notify`](Self::notify)
/// replaces whatever was showing.
#[derive(Debug, Clone, Default)]
pub struct AlertPresenter {
    current: Option<Alert>,
    next_id: u64,
}

impl AlertPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Replace the visible alert with a new one placed in `view`.
    ///
    /// The caller owns the expiry timer and should call [`expire`](Self::expire)
    /// with the returned id once the TTL has elapsed.
    pub fn notify(
        &mut self,
        kind: AlertKind,
        message: &str,
        view: Option<&str>,
    ) -> (AlertId, Vec<Intent>) {
        let mut intents = self.clear();

        self.next_id += 1;
        let alert = Alert {
            id: AlertId(self.next_id),
            kind,
            message: message.to_string(),
        };
        trace!("Showing {} alert {:?}: {}", kind, alert.id, message);

        let id = alert.id;
        self.current = Some(alert.clone());
        intents.push(Intent::ShowAlert {
            alert,
            view: view.map(str::to_string),
        });
        intents.push(Intent::ScrollToTop);
        (id, intents)
    }

    /// Remove alert `id` if it is still the one showing
    pub fn expire(&mut self, id: AlertId) -> Vec<Intent> {
        match &self.current {
            Some(alert) if alert.id == id => self.clear(),
            _ => Vec::new(),
        }
    }

    /// Remove whatever alert is showing
    pub fn clear(&mut self) -> Vec<Intent> {
        match self.current.take() {
            Some(alert) => vec![Intent::DismissAlert { id: alert.id }],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_twice_keeps_only_second() {
        let mut alerts = AlertPresenter::new();
        let (first, _) = alerts.notify(AlertKind::Success, "first", Some("home"));
        let (second, intents) = alerts.notify(AlertKind::Warning, "second", Some("home"));

        assert_eq!(intents[0], Intent::DismissAlert { id: first });
        let current = alerts.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, AlertKind::Warning);
    }

    #[test]
    fn test_expire_ignores_replaced_alert() {
        let mut alerts = AlertPresenter::new();
        let (first, _) = alerts.notify(AlertKind::Success, "first", None);
        let (second, _) = alerts.notify(AlertKind::Success, "second", None);

        assert!(alerts.expire(first).is_empty());
        assert_eq!(alerts.current().map(|a| a.id), Some(second));

        assert_eq!(alerts.expire(second), vec![Intent::DismissAlert { id: second }]);
        assert!(alerts.current().is_none());
        assert!(alerts.expire(second).is_empty());
    }

    #[test]
    fn test_alert_targets_view_and_scrolls() {
        let mut alerts = AlertPresenter::new();
        let (_, intents) = alerts.notify(AlertKind::Danger, "oops", Some("register"));
        match &intents[0] {
            Intent::ShowAlert { view, alert } => {
                assert_eq!(view.as_deref(), Some("register"));
                assert_eq!(alert.kind, AlertKind::Danger);
            }
            other => panic!("expected ShowAlert, got {:?}", other),
        }
        assert_eq!(intents.last(), Some(&Intent::ScrollToTop));
    }
}
