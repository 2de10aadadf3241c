//! MindConnect view-model
//!
//! Headless controller for the MindConnect mental health support site. It
//! decides which view is shown, turns form submissions into domain records,
//! and reports every UI change as an [`Intent`] to a [`Renderer`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use mindconnect::prelude::*;
//!
//! # async fn run() -> Result<(), Error> {
//! let renderer = Arc::new(RecordingRenderer::new());
//! let app = MindConnect::new(renderer.clone());
//!
//! app.show_view("register").await;
//! let form = FormData::new()
//!     .field("fullName", "Ada Lovelace")
//!     .field("email", "ada@example.org")
//!     .field("privacy", "on");
//! app.submit_registration(&form).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod render;
pub mod worker;

mod actions;
mod submit;

use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::sleep;

pub use mindconnect_intake::{
    BackendError, FormData, FormState, IntakeError, Receipt, RetryPolicy, SimulatedBackend,
    SimulatedLatency, Submission, SubmissionBackend, SupportQuery,
};
pub use mindconnect_store::{
    CheckinRecord, DashboardMetrics, Repository, SessionSnapshot, StoreError, SupportCategory,
    SupportConnection, UrgencyLevel, UserProfile,
};
pub use mindconnect_views::{Alert, AlertId, AlertKind, Confirmation, FormId, Intent, ModalId};

use crate::config::AppOptions;
use crate::error::Error;
use crate::render::Renderer;
use crate::worker::{register_worker, BackgroundWorker};
use mindconnect_intake::FormTracker;
use mindconnect_views::ViewModel;

/// One user session of the site.
///
/// Cloning is cheap and every clone shares the same state, which is how the
/// timer tasks (alert expiry, dashboard redirect) reach back into it.
#[derive(Clone)]
pub struct MindConnect {
    options: AppOptions,
    view: Arc<RwLock<ViewModel>>,
    store: Arc<RwLock<Repository>>,
    forms: Arc<RwLock<FormTracker>>,
    backend: Arc<dyn SubmissionBackend>,
    renderer: Arc<dyn Renderer>,
}

impl MindConnect {
    /// Create a session backed by the simulated backend with default options
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self::new_with_options(renderer, AppOptions::default())
    }

    /// Create a session backed by the simulated backend
    pub fn new_with_options(renderer: Arc<dyn Renderer>, options: AppOptions) -> Self {
        let backend = Arc::new(SimulatedBackend::new(options.latency.clone()));
        Self::with_backend(renderer, backend, options)
    }

    /// Create a session that submits forms to `backend`
    pub fn with_backend(
        renderer: Arc<dyn Renderer>,
        backend: Arc<dyn SubmissionBackend>,
        options: AppOptions,
    ) -> Self {
        Self {
            options,
            view: Arc::new(RwLock::new(ViewModel::default())),
            store: Arc::new(RwLock::new(Repository::new())),
            forms: Arc::new(RwLock::new(FormTracker::new())),
            backend,
            renderer,
        }
    }

    /// Replace the session's repository, e.g. with seeded demo data
    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.store = Arc::new(RwLock::new(repository));
        self
    }

    pub fn options(&self) -> &AppOptions {
        &self.options
    }

    /// Register the optional background worker and draw the first dashboard
    pub async fn start(&self, worker: Option<&dyn BackgroundWorker>) {
        if let Some(worker) = worker {
            register_worker(worker).await;
        }
        self.refresh_dashboard().await;
        info!("MindConnect application initialized successfully");
        info!("Supporting SDG 3: Good Health and Well-being");
    }

    /// Change the view model and render the result under the same write
    /// guard, so intents reach the renderer in the order they were applied.
    pub(crate) async fn apply<F>(&self, change: F)
    where
        F: FnOnce(&mut ViewModel) -> Vec<Intent>,
    {
        let mut view = self.view.write().await;
        let intents = change(&mut view);
        self.render_all(&intents);
    }

    /// Render intents that don't change the view model
    pub(crate) async fn emit(&self, intents: Vec<Intent>) {
        self.apply(|_| intents).await;
    }

    fn render_all(&self, intents: &[Intent]) {
        for intent in intents {
            self.renderer.render(intent);
        }
    }

    // --- Queries ---

    pub async fn active_view(&self) -> Option<String> {
        self.view.read().await.router().active().map(str::to_string)
    }

    pub async fn is_modal_open(&self, modal: ModalId) -> bool {
        self.view.read().await.modals().is_open(modal)
    }

    pub async fn mobile_menu_open(&self) -> bool {
        self.view.read().await.router().mobile_menu_open()
    }

    pub async fn current_alert(&self) -> Option<Alert> {
        self.view.read().await.alerts().current().cloned()
    }

    pub async fn form_state(&self, form: FormId) -> FormState {
        self.forms.read().await.state(form)
    }

    pub async fn active_profile(&self) -> Option<UserProfile> {
        self.store.read().await.active_profile().cloned()
    }

    pub async fn checkins(&self) -> Vec<CheckinRecord> {
        self.store.read().await.checkins().to_vec()
    }

    pub async fn connections(&self) -> Vec<SupportConnection> {
        self.store.read().await.connections().to_vec()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.store.read().await.snapshot()
    }

    /// The session's records as pretty-printed JSON
    pub async fn export_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.snapshot().await)?)
    }

    // --- Navigation ---

    /// Show `view_id`; unknown ids are ignored
    pub async fn show_view(&self, view_id: &str) {
        self.apply(|view| view.show_view(view_id)).await;
    }

    pub async fn toggle_mobile_menu(&self) {
        self.apply(|view| view.toggle_mobile_menu()).await;
    }

    // --- Modals ---

    pub async fn open_modal(&self, modal: ModalId) {
        self.apply(|view| view.open_modal(modal)).await;
    }

    pub async fn close_modal(&self, modal: ModalId) {
        self.apply(|view| view.close_modal(modal)).await;
    }

    pub async fn backdrop_click(&self, modal: ModalId) {
        self.apply(|view| view.backdrop_click(modal)).await;
    }

    /// Escape key: closes every open modal
    pub async fn escape(&self) {
        self.apply(|view| view.escape()).await;
    }

    pub async fn show_checkin_modal(&self) {
        self.open_modal(ModalId::Checkin).await;
    }

    pub async fn close_checkin_modal(&self) {
        self.close_modal(ModalId::Checkin).await;
    }

    pub async fn show_crisis_modal(&self) {
        self.open_modal(ModalId::Crisis).await;
    }

    pub async fn close_crisis_modal(&self) {
        self.close_modal(ModalId::Crisis).await;
    }

    // --- Alerts ---

    /// Show an alert in the active view, replacing any current one. It is
    /// dismissed automatically after [`AppOptions::alert_ttl`].
    pub async fn notify(&self, kind: AlertKind, message: &str) -> AlertId {
        let id = {
            let mut view = self.view.write().await;
            let (id, intents) = view.notify(kind, message);
            self.render_all(&intents);
            id
        };

        let this = self.clone();
        let ttl = self.options.alert_ttl;
        tokio::spawn(async move {
            sleep(ttl).await;
            this.apply(|view| view.expire_alert(id)).await;
        });
        id
    }

    // --- Dashboard ---

    /// Recompute the dashboard figures; `None` while nobody is registered
    pub async fn refresh_dashboard(&self) -> Option<DashboardMetrics> {
        let metrics = mindconnect_store::compute(&*self.store.read().await, Utc::now())?;
        debug!("Dashboard refreshed: {:?}", metrics);
        self.emit(vec![Intent::RefreshDashboard { metrics }]).await;
        Some(metrics)
    }

    // --- Crisis support ---

    /// Ask before dialling the crisis line
    pub async fn call_crisis_line(&self) {
        self.emit(vec![Intent::Confirm {
            confirmation: Confirmation::DialCrisisLine,
        }])
        .await;
    }

    /// Apply the user's answer to a [`Confirmation`] prompt
    pub async fn resolve_confirmation(&self, confirmation: Confirmation, accepted: bool) {
        if !accepted {
            debug!("{:?} declined", confirmation);
            return;
        }
        match confirmation {
            Confirmation::CrisisEscalation => self.show_crisis_modal().await,
            Confirmation::DialCrisisLine => {
                info!("Dialling crisis line {}", self.options.crisis_line);
                self.emit(vec![Intent::Dial {
                    uri: format!("tel:{}", self.options.crisis_line),
                }])
                .await;
            }
        }
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::AppOptions;
    pub use crate::error::Error;
    pub use crate::render::{LogRenderer, RecordingRenderer, Renderer};
    pub use crate::worker::BackgroundWorker;
    pub use crate::MindConnect;
    pub use mindconnect_intake::{FormData, SubmissionBackend};
    pub use mindconnect_views::{AlertKind, Confirmation, FormId, Intent, ModalId};
}
