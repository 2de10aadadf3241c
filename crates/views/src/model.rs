use crate::alert::{AlertId, AlertKind, AlertPresenter};
use crate::intent::Intent;
use crate::modal::{ModalController, ModalId};
use crate::router::Router;

/// Combined view state of the page
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    router: Router,
    modals: ModalController,
    alerts: AlertPresenter,
}

impl ViewModel {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            modals: ModalController::new(),
            alerts: AlertPresenter::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn alerts(&self) -> &AlertPresenter {
        &self.alerts
    }

    pub fn show_view(&mut self, view_id: &str) -> Vec<Intent> {
        self.router.show(view_id)
    }

    pub fn toggle_mobile_menu(&mut self) -> Vec<Intent> {
        self.router.toggle_mobile_menu()
    }

    pub fn open_modal(&mut self, modal: ModalId) -> Vec<Intent> {
        self.modals.open(modal)
    }

    pub fn close_modal(&mut self, modal: ModalId) -> Vec<Intent> {
        self.modals.close(modal)
    }

    pub fn backdrop_click(&mut self, modal: ModalId) -> Vec<Intent> {
        self.modals.backdrop_click(modal)
    }

    pub fn escape(&mut self) -> Vec<Intent> {
        self.modals.escape()
    }

    /// Show an alert in the active view
    pub fn notify(&mut self, kind: AlertKind, message: &str) -> (AlertId, Vec<Intent>) {
        let view = self.router.active().map(str::to_string);
        self.alerts.notify(kind, message, view.as_deref())
    }

    pub fn expire_alert(&mut self, id: AlertId) -> Vec<Intent> {
        self.alerts.expire(id)
    }
}
