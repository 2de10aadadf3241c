//! Resource, group, provider and dashboard actions

use chrono::Utc;
use log::debug;

use mindconnect_store::{SupportCategory, SupportConnection};
use mindconnect_views::AlertKind;

use crate::MindConnect;

impl MindConnect {
    /// Record a connection, confirm it to the user and refresh the dashboard
    async fn connect(&self, connection: SupportConnection, message: &str) {
        self.store.write().await.append_connection(connection);
        self.notify(AlertKind::Success, message).await;
        self.refresh_dashboard().await;
    }

    /// Confirm an informational request; nothing is recorded
    async fn inform(&self, action: &str, target: Option<&str>, message: &str) {
        debug!("{} requested (target: {:?})", action, target);
        self.notify(AlertKind::Success, message).await;
    }

    pub async fn join_peer_group(&self) {
        self.connect(
            SupportConnection::new(SupportCategory::Peer, Utc::now()),
            "Great! We'll connect you with a peer support group coordinator within 24 hours.",
        )
        .await;
    }

    pub async fn find_healthcare(&self) {
        self.connect(
            SupportConnection::new(SupportCategory::Healthcare, Utc::now()),
            "Searching for healthcare providers in your area. You'll receive a list of available options shortly.",
        )
        .await;
    }

    pub async fn find_counselors(&self) {
        self.connect(
            SupportConnection::new(SupportCategory::Counseling, Utc::now()),
            "Finding licensed counselors near you. We'll send you contact information and availability.",
        )
        .await;
    }

    pub async fn find_faith_support(&self) {
        self.connect(
            SupportConnection::new(SupportCategory::Faith, Utc::now()),
            "Connecting you with faith-based mental health support in your community.",
        )
        .await;
    }

    pub async fn explore_ngos(&self) {
        self.connect(
            SupportConnection::new(SupportCategory::Ngo, Utc::now()),
            "Exploring NGO mental health programs. You'll receive information about available services.",
        )
        .await;
    }

    pub async fn join_group(&self, group_id: &str) {
        self.connect(
            SupportConnection::new(SupportCategory::Group, Utc::now()).with_target(group_id),
            "Request sent! The group facilitator will contact you within 48 hours with joining information.",
        )
        .await;
    }

    pub async fn book_appointment(&self, provider_id: &str) {
        self.connect(
            SupportConnection::new(SupportCategory::Appointment, Utc::now())
                .with_target(provider_id),
            "Appointment request submitted. The provider will contact you within 1-2 business days.",
        )
        .await;
    }

    pub async fn join_ministry(&self, ministry_id: &str) {
        self.connect(
            SupportConnection::new(SupportCategory::Ministry, Utc::now()).with_target(ministry_id),
            "Ministry coordinator will reach out to welcome you and provide meeting details.",
        )
        .await;
    }

    pub async fn contact_group(&self, group_id: &str) {
        self.inform(
            "contact_group",
            Some(group_id),
            "Contact information sent to your email. You can reach out directly to learn more.",
        )
        .await;
    }

    pub async fn learn_more(&self, provider_id: &str) {
        self.inform(
            "learn_more",
            Some(provider_id),
            "More information about this provider has been sent to your email.",
        )
        .await;
    }

    pub async fn contact_hospital(&self, hospital_id: &str) {
        self.inform(
            "contact_hospital",
            Some(hospital_id),
            "Contact information provided. You can call directly or request a callback.",
        )
        .await;
    }

    pub async fn get_directions(&self, location_id: &str) {
        self.inform(
            "get_directions",
            Some(location_id),
            "Directions sent to your phone. You can also access them anytime from your dashboard.",
        )
        .await;
    }

    pub async fn contact_ministry(&self, ministry_id: &str) {
        self.inform(
            "contact_ministry",
            Some(ministry_id),
            "Contact information provided. Feel free to reach out with any questions.",
        )
        .await;
    }

    pub async fn explore_programs(&self, ngo_id: &str) {
        self.inform(
            "explore_programs",
            Some(ngo_id),
            "Program information sent to your email. Explore various mental health initiatives.",
        )
        .await;
    }

    pub async fn volunteer(&self, ngo_id: &str) {
        self.inform(
            "volunteer",
            Some(ngo_id),
            "Thank you for your interest! Volunteer coordinator will contact you about opportunities.",
        )
        .await;
    }

    pub async fn view_schedule(&self) {
        self.inform(
            "view_schedule",
            None,
            "Your upcoming appointments and sessions are displayed in your personal calendar.",
        )
        .await;
    }

    pub async fn view_mood_trends(&self) {
        self.inform(
            "view_mood_trends",
            None,
            "Mood tracking chart updated. Review your progress patterns over time.",
        )
        .await;
    }

    pub async fn manage_goals(&self) {
        self.inform(
            "manage_goals",
            None,
            "Goal management tools opened. Set new goals and track your achievements.",
        )
        .await;
    }
}
