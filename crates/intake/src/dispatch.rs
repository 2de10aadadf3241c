//! Executes a submission against a backend with timeout and retries

use log::{debug, warn};
use std::time::Duration;
use tokio::time::{sleep, timeout};

use crate::backend::{Receipt, Submission, SubmissionBackend};
use crate::error::BackendError;

/// When and how often to retry a failed submission
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    pub interval: Duration,
    pub backoff_factor: f64,
    pub max_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            interval: Duration::from_millis(500),
            backoff_factor: 1.5,
            max_interval: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// A single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, value: u32) -> Self {
        self.max_attempts = value;
        self
    }

    pub fn with_interval(mut self, value: Duration) -> Self {
        self.interval = value;
        self
    }

    pub fn with_backoff_factor(mut self, value: f64) -> Self {
        self.backoff_factor = value;
        self
    }

    pub fn with_max_interval(mut self, value: Duration) -> Self {
        self.max_interval = value;
        self
    }

    /// Wait before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let mut delay = self.interval;
        for _ in 1..retry {
            delay = delay.mul_f64(self.backoff_factor.max(1.0));
            if delay >= self.max_interval {
                return self.max_interval;
            }
        }
        delay.min(self.max_interval)
    }
}

/// Builder for sending one [`Submission`]
pub struct Dispatch<'a> {
    backend: &'a dyn SubmissionBackend,
    submission: &'a Submission,
    timeout: Option<Duration>,
    retry: RetryPolicy,
}

impl<'a> Dispatch<'a> {
    pub fn new(backend: &'a dyn SubmissionBackend, submission: &'a Submission) -> Self {
        Self {
            backend,
            submission,
            timeout: None,
            retry: RetryPolicy::none(),
        }
    }

    /// Limit each attempt to `value`
    pub fn timeout(mut self, value: Option<Duration>) -> Self {
        self.timeout = value;
        self
    }

    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    async fn attempt(&self) -> Result<Receipt, BackendError> {
        match self.timeout {
            Some(limit) => match timeout(limit, self.backend.submit(self.submission)).await {
                Ok(result) => result,
                Err(_) => Err(BackendError::Timeout(limit)),
            },
            None => self.backend.submit(self.submission).await,
        }
    }

    /// Send the submission, retrying retryable failures per the policy
    pub async fn execute(&self) -> Result<Receipt, BackendError> {
        let form = self.submission.form();
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            debug!("Submitting {} form (attempt {}/{})", form, attempt, max_attempts);
            match self.attempt().await {
                Ok(receipt) => return Ok(receipt),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        "{} submission failed ({}), retrying in {:?}",
                        form, e, delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!("{} submission failed after {} attempt(s): {}", form, attempt, e);
                    return Err(e);
                }
            }
        }
    }
}
