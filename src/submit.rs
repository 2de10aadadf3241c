//! Form submissions: registration, support search and daily check-in

use chrono::Utc;
use log::{info, warn};
use tokio::time::sleep;

use mindconnect_intake::{
    extract_checkin, extract_registration, extract_support_query, urgency_requires_escalation,
    Dispatch, FormData, IntakeError, Submission, SupportQuery,
};
use mindconnect_store::{CheckinRecord, UserProfile};
use mindconnect_views::{AlertKind, Confirmation, FormId, Intent, ModalId};

use crate::error::Error;
use crate::MindConnect;

impl MindConnect {
    /// Handle a submitted registration form.
    ///
    /// On success the new profile becomes the active user and the session
    /// moves to the dashboard after [`dashboard_redirect_delay`].
    ///
    /// [`dashboard_redirect_delay`]: crate::config::AppOptions::dashboard_redirect_delay
    pub async fn submit_registration(&self, data: &FormData) -> Result<UserProfile, Error> {
        let form = FormId::Registration;
        self.begin(form).await?;

        let profile = match extract_registration(data, Utc::now()) {
            Ok(profile) => profile,
            Err(e) => return Err(self.abort(form, e).await),
        };
        if let Err(e) = self.send(&Submission::Registration(profile.clone())).await {
            return Err(self.abort(form, e).await);
        }

        self.store.write().await.register(profile.clone());
        let welcome = format!(
            "Welcome to MindConnect, {}! Your account has been created successfully.",
            profile.full_name
        );
        self.settle(form, &welcome, true).await;

        let this = self.clone();
        let delay = self.options.dashboard_redirect_delay;
        tokio::spawn(async move {
            sleep(delay).await;
            this.show_view("dashboard").await;
            this.refresh_dashboard().await;
        });

        Ok(profile)
    }

    /// Change handler of the registration form's urgency field.
    ///
    /// Returns true when the crisis escalation prompt was raised.
    pub async fn urgency_changed(&self, value: &str) -> bool {
        if !urgency_requires_escalation(value) {
            return false;
        }
        self.emit(vec![Intent::Confirm {
            confirmation: Confirmation::CrisisEscalation,
        }])
        .await;
        true
    }

    /// Handle a submitted support search
    pub async fn submit_support_search(&self, data: &FormData) -> Result<SupportQuery, Error> {
        let form = FormId::SupportSearch;
        self.begin(form).await?;

        let query = extract_support_query(data);
        self.notify(
            AlertKind::Success,
            &format!("Searching for support options in {}...", query.location_label()),
        )
        .await;

        if let Err(e) = self.send(&Submission::SupportSearch(query.clone())).await {
            return Err(self.abort(form, e).await);
        }

        info!("Updating support results for: {:?}", query);
        self.settle(
            form,
            "Search completed! Here are the available support options in your area.",
            false,
        )
        .await;
        Ok(query)
    }

    /// Handle a submitted daily check-in
    pub async fn submit_checkin(&self, data: &FormData) -> Result<CheckinRecord, Error> {
        let form = FormId::Checkin;
        self.begin(form).await?;

        let record = match extract_checkin(data, Utc::now()) {
            Ok(record) => record,
            Err(e) => return Err(self.abort(form, e).await),
        };
        if let Err(e) = self.send(&Submission::Checkin(record.clone())).await {
            return Err(self.abort(form, e).await);
        }

        self.store.write().await.append_checkin(record.clone());
        self.settle(
            form,
            "Check-in saved successfully! Keep up the great work.",
            true,
        )
        .await;
        self.close_modal(ModalId::Checkin).await;

        let on_dashboard = self.view.read().await.router().is_active("dashboard");
        if on_dashboard {
            self.refresh_dashboard().await;
        }
        Ok(record)
    }

    async fn begin(&self, form: FormId) -> Result<(), Error> {
        let begun = self.forms.write().await.begin(form);
        if let Err(e) = begun {
            warn!("{}", e);
            return Err(e.into());
        }
        self.emit(vec![Intent::SetLoading {
            form,
            loading: true,
        }])
        .await;
        Ok(())
    }

    async fn send(&self, submission: &Submission) -> Result<(), IntakeError> {
        Dispatch::new(self.backend.as_ref(), submission)
            .timeout(self.options.submission_timeout)
            .retry(self.options.retry.clone())
            .execute()
            .await?;
        Ok(())
    }

    /// Return `form` to Idle and tell the user what went wrong
    async fn abort(&self, form: FormId, err: IntakeError) -> Error {
        self.forms.write().await.fail(form);
        self.emit(vec![Intent::SetLoading {
            form,
            loading: false,
        }])
        .await;

        if err.is_validation() {
            self.notify(AlertKind::Warning, &err.to_string()).await;
        } else {
            warn!("{} submission failed: {}", form, err);
            self.notify(
                AlertKind::Danger,
                &format!("We couldn't submit your {}. Please try again.", form),
            )
            .await;
        }
        err.into()
    }

    async fn settle(&self, form: FormId, message: &str, reset: bool) {
        self.emit(vec![Intent::SetLoading {
            form,
            loading: false,
        }])
        .await;
        self.notify(AlertKind::Success, message).await;
        if reset {
            self.emit(vec![Intent::ResetForm { form }]).await;
        }
        self.forms.write().await.settle(form);
    }
}
