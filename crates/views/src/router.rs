//! Page router: exactly one view visible at a time

use log::{debug, trace};

use crate::intent::Intent;

/// Navigation link tied to a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

/// A view the router knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSpec {
    pub id: String,
    pub nav: Option<NavEntry>,
}

impl ViewSpec {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            nav: None,
        }
    }

    pub fn with_nav(mut self, nav_id: &str, label: &str) -> Self {
        self.nav = Some(NavEntry {
            id: nav_id.to_string(),
            label: label.to_string(),
        });
        self
    }
}

/// `(view id, nav link id, nav label)` for the site's pages
pub const DEFAULT_VIEWS: [(&str, Option<(&str, &str)>); 8] = [
    ("home", Some(("nav-home", "Home"))),
    ("register", Some(("nav-register", "Get Started"))),
    ("support", Some(("nav-support", "Find Support"))),
    ("resources", Some(("nav-resources", "Resources"))),
    ("groups", None),
    ("providers", None),
    ("dashboard", Some(("nav-dashboard", "Dashboard"))),
    ("crisis", Some(("nav-crisis", "Crisis Help"))),
];

#[derive(Debug, Clone)]
pub struct Router {
    views: Vec<ViewSpec>,
    active: Option<String>,
    mobile_menu_open: bool,
}

impl Default for Router {
    fn default() -> Self {
        let views = DEFAULT_VIEWS
            .iter()
            .map(|(id, nav)| match nav {
                Some((nav_id, label)) => ViewSpec::new(id).with_nav(nav_id, label),
                None => ViewSpec::new(id),
            })
            .collect();
        Self::new(views)
    }
}

impl Router {
    /// Build a router over `views`; the first one starts active
    pub fn new(views: Vec<ViewSpec>) -> Self {
        let active = views.first().map(|v| v.id.clone());
        Self {
            views,
            active,
            mobile_menu_open: false,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, view_id: &str) -> bool {
        self.active.as_deref() == Some(view_id)
    }

    /// Nav link highlighted for the active view
    pub fn active_nav(&self) -> Option<&NavEntry> {
        let active = self.active.as_deref()?;
        self.find(active)?.nav.as_ref()
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    fn find(&self, view_id: &str) -> Option<&ViewSpec> {
        self.views.iter().find(|v| v.id == view_id)
    }

    /// Show `view_id`.
    ///
    /// An unknown id is ignored: no intents are produced and the current view
    /// stays active.
    pub fn show(&mut self, view_id: &str) -> Vec<Intent> {
        let Some(spec) = self.find(view_id) else {
            debug!("Ignoring request for unknown view '{}'", view_id);
            return Vec::new();
        };
        let nav = spec.nav.as_ref().map(|n| n.id.clone());

        trace!("Activating view '{}' (nav: {:?})", view_id, nav);
        self.active = Some(view_id.to_string());

        let mut intents = vec![Intent::ActivateView {
            view: view_id.to_string(),
            nav,
        }];
        intents.extend(self.close_mobile_menu());
        intents.push(Intent::ScrollToTop);
        intents
    }

    pub fn toggle_mobile_menu(&mut self) -> Vec<Intent> {
        self.mobile_menu_open = !self.mobile_menu_open;
        vec![Intent::SetMobileMenu {
            open: self.mobile_menu_open,
        }]
    }

    pub fn close_mobile_menu(&mut self) -> Vec<Intent> {
        if !self.mobile_menu_open {
            return Vec::new();
        }
        self.mobile_menu_open = false;
        vec![Intent::SetMobileMenu { open: false }]
    }
}
