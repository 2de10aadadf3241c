use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::intent::Intent;

/// Overlay dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalId {
    Checkin,
    Crisis,
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalId::Checkin => f.write_str("checkin"),
            ModalId::Crisis => f.write_str("crisis"),
        }
    }
}

/// Tracks which modals are open. Modals don't stack: each one is
/// independent of the other.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    open: BTreeSet<ModalId>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, modal: ModalId) -> bool {
        self.open.contains(&modal)
    }

    pub fn open_modals(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.open.iter().copied()
    }

    pub fn open(&mut self, modal: ModalId) -> Vec<Intent> {
        if !self.open.insert(modal) {
            return Vec::new();
        }
        trace!("Opening {} modal", modal);
        vec![Intent::OpenModal { modal }]
    }

    pub fn close(&mut self, modal: ModalId) -> Vec<Intent> {
        if !self.open.remove(&modal) {
            return Vec::new();
        }
        trace!("Closing {} modal", modal);
        vec![Intent::CloseModal { modal }]
    }

    /// Click on the backdrop around `modal`'s content
    pub fn backdrop_click(&mut self, modal: ModalId) -> Vec<Intent> {
        self.close(modal)
    }

    /// Escape closes everything that is open
    pub fn escape(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.open)
            .into_iter()
            .map(|modal| Intent::CloseModal { modal })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut modals = ModalController::new();
        assert_eq!(
            modals.open(ModalId::Checkin),
            vec![Intent::OpenModal {
                modal: ModalId::Checkin
            }]
        );
        assert!(modals.is_open(ModalId::Checkin));
        assert_eq!(
            modals.close(ModalId::Checkin),
            vec![Intent::CloseModal {
                modal: ModalId::Checkin
            }]
        );
        assert!(!modals.is_open(ModalId::Checkin));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut modals = ModalController::new();
        assert!(modals.close(ModalId::Crisis).is_empty());
        modals.open(ModalId::Crisis);
        modals.close(ModalId::Crisis);
        assert!(modals.close(ModalId::Crisis).is_empty());
        assert!(modals.open(ModalId::Crisis).len() == 1);
        assert!(modals.open(ModalId::Crisis).is_empty());
    }

    #[test]
    fn test_opening_one_keeps_the_other() {
        let mut modals = ModalController::new();
        modals.open(ModalId::Checkin);
        modals.open(ModalId::Crisis);
        assert!(modals.is_open(ModalId::Checkin));
        assert!(modals.is_open(ModalId::Crisis));
    }

    #[test]
    fn test_escape_closes_all_open() {
        let mut modals = ModalController::new();
        modals.open(ModalId::Checkin);
        modals.open(ModalId::Crisis);

        let intents = modals.escape();
        assert_eq!(intents.len(), 2);
        assert_eq!(modals.open_modals().count(), 0);
        assert!(modals.escape().is_empty());
    }

    #[test]
    fn test_backdrop_click_closes_only_target() {
        let mut modals = ModalController::new();
        modals.open(ModalId::Checkin);
        modals.open(ModalId::Crisis);
        modals.backdrop_click(ModalId::Crisis);
        assert!(modals.is_open(ModalId::Checkin));
        assert!(!modals.is_open(ModalId::Crisis));
    }
}
