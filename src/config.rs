//! Configuration options for the MindConnect view-model

use std::str::FromStr;
use std::time::Duration;

use mindconnect_intake::{RetryPolicy, SimulatedLatency};
use mindconnect_views::DEFAULT_ALERT_TTL;

use crate::error::Error;

/// Configuration options for [`MindConnect`](crate::MindConnect)
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Delays of the simulated backend
    pub latency: SimulatedLatency,

    /// Limit for a single submission attempt
    pub submission_timeout: Option<Duration>,

    /// Retry policy for failed submissions
    pub retry: RetryPolicy,

    /// How long an alert stays visible
    pub alert_ttl: Duration,

    /// Pause between a successful registration and the dashboard redirect
    pub dashboard_redirect_delay: Duration,

    /// Number dialled by the crisis-line action
    pub crisis_line: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            latency: SimulatedLatency::default(),
            submission_timeout: Some(Duration::from_secs(30)),
            retry: RetryPolicy::default(),
            alert_ttl: DEFAULT_ALERT_TTL,
            dashboard_redirect_delay: Duration::from_millis(2000),
            crisis_line: "988".to_string(),
        }
    }
}

impl AppOptions {
    /// Read `MINDCONNECT_*` variables from the process environment
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from any key lookup; missing keys keep their defaults.
    ///
    /// Durations are given in milliseconds. A submission timeout of `0`
    /// disables the timeout.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(ms) = parse_var::<u64, _>(&lookup, "MINDCONNECT_REGISTRATION_DELAY_MS")? {
            options.latency.registration = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MINDCONNECT_SEARCH_DELAY_MS")? {
            options.latency.support_search = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MINDCONNECT_CHECKIN_DELAY_MS")? {
            options.latency.checkin = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MINDCONNECT_SUBMIT_TIMEOUT_MS")? {
            options.submission_timeout = (ms > 0).then(|| Duration::from_millis(ms));
        }
        if let Some(attempts) = parse_var::<u32, _>(&lookup, "MINDCONNECT_MAX_ATTEMPTS")? {
            options.retry.max_attempts = attempts;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MINDCONNECT_ALERT_TTL_MS")? {
            options.alert_ttl = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MINDCONNECT_REDIRECT_DELAY_MS")? {
            options.dashboard_redirect_delay = Duration::from_millis(ms);
        }
        if let Some(line) = lookup("MINDCONNECT_CRISIS_LINE") {
            options.crisis_line = line;
        }

        Ok(options)
    }

    /// Set the simulated backend latency
    pub fn with_latency(mut self, value: SimulatedLatency) -> Self {
        self.latency = value;
        self
    }

    /// Set the per-attempt submission timeout
    pub fn with_submission_timeout(mut self, value: Option<Duration>) -> Self {
        self.submission_timeout = value;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, value: RetryPolicy) -> Self {
        self.retry = value;
        self
    }

    /// Set the alert lifetime
    pub fn with_alert_ttl(mut self, value: Duration) -> Self {
        self.alert_ttl = value;
        self
    }

    /// Set the delay before redirecting to the dashboard
    pub fn with_dashboard_redirect_delay(mut self, value: Duration) -> Self {
        self.dashboard_redirect_delay = value;
        self
    }

    /// Set the crisis line number
    pub fn with_crisis_line(mut self, value: &str) -> Self {
        self.crisis_line = value.to_string();
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(None),
    }
}
