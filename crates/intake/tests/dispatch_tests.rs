use async_trait::async_trait;
use chrono::Utc;
use mindconnect_intake::{
    BackendError, Dispatch, FormData, Receipt, RetryPolicy, SimulatedBackend, SimulatedLatency,
    Submission, SubmissionBackend, SupportQuery,
};
use mindconnect_store::{CheckinRecord, MoodScore};
use mindconnect_views::FormId;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Plays back a fixed list of outcomes, then succeeds
struct ScriptedBackend {
    script: Mutex<VecDeque<Result<(), BackendError>>>,
    calls: Mutex<u32>,
    delay: Duration,
}

impl ScriptedBackend {
    fn new(script: Vec<Result<(), BackendError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(0),
            delay: Duration::ZERO,
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl SubmissionBackend for ScriptedBackend {
    async fn submit(&self, submission: &Submission) -> Result<Receipt, BackendError> {
        *self.calls.lock().unwrap() += 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.script.lock().unwrap().pop_front().unwrap_or(Ok(()));
        next.map(|_| Receipt::now(submission.form()))
    }
}

fn checkin_submission() -> Submission {
    Submission::Checkin(CheckinRecord::new(MoodScore::new(5).unwrap(), Utc::now()))
}

#[tokio::test(start_paused = true)]
async fn test_simulated_backend_waits_for_latency() {
    let backend = SimulatedBackend::default();
    let submission = Submission::SupportSearch(SupportQuery::default());

    let started = Instant::now();
    let receipt = Dispatch::new(&backend, &submission).execute().await.unwrap();

    assert_eq!(receipt.form, FormId::SupportSearch);
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert!(started.elapsed() < Duration::from_millis(1600));
}

#[tokio::test(start_paused = true)]
async fn test_retries_retryable_failures_until_success() {
    let backend = ScriptedBackend::new(vec![
        Err(BackendError::unavailable("503")),
        Err(BackendError::unavailable("503")),
    ]);
    let submission = checkin_submission();
    let policy = RetryPolicy::default()
        .with_max_attempts(3)
        .with_interval(Duration::from_millis(100))
        .with_backoff_factor(2.0);

    let started = Instant::now();
    let receipt = Dispatch::new(&backend, &submission)
        .retry(policy)
        .execute()
        .await
        .unwrap();

    assert_eq!(receipt.form, FormId::Checkin);
    assert_eq!(backend.calls(), 3);
    // 100ms before the second attempt, 200ms before the third
    assert!(started.elapsed() >= Duration::from_millis(300));
    assert!(started.elapsed() < Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn test_gives_up_after_max_attempts() {
    let backend = ScriptedBackend::new(vec![
        Err(BackendError::unavailable("down")),
        Err(BackendError::unavailable("still down")),
        Err(BackendError::unavailable("never reached")),
    ]);
    let submission = checkin_submission();

    let result = Dispatch::new(&backend, &submission)
        .retry(RetryPolicy::default().with_max_attempts(2))
        .execute()
        .await;

    assert_eq!(result, Err(BackendError::Unavailable("still down".to_string())));
    assert_eq!(backend.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_rejection_is_not_retried() {
    let backend = ScriptedBackend::new(vec![Err(BackendError::rejected("duplicate"))]);
    let submission = checkin_submission();

    let result = Dispatch::new(&backend, &submission)
        .retry(RetryPolicy::default().with_max_attempts(5))
        .execute()
        .await;

    assert!(matches!(result, Err(BackendError::Rejected(_))));
    assert_eq!(backend.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_backend_times_out() {
    let backend = SimulatedBackend::new(SimulatedLatency {
        registration: Duration::from_secs(60),
        ..SimulatedLatency::default()
    });
    let profile = mindconnect_intake::extract_registration(
        &FormData::new()
            .field("fullName", "Ada")
            .field("email", "ada@example.org")
            .field("privacy", "on"),
        Utc::now(),
    )
    .unwrap();
    let submission = Submission::Registration(profile);

    let result = Dispatch::new(&backend, &submission)
        .timeout(Some(Duration::from_secs(10)))
        .execute()
        .await;

    assert_eq!(result, Err(BackendError::Timeout(Duration::from_secs(10))));
}

#[tokio::test(start_paused = true)]
async fn test_timeouts_count_as_retryable() {
    let backend = ScriptedBackend::new(vec![]).with_delay(Duration::from_secs(2));
    let submission = checkin_submission();

    let result = Dispatch::new(&backend, &submission)
        .timeout(Some(Duration::from_secs(1)))
        .retry(RetryPolicy::default().with_max_attempts(3))
        .execute()
        .await;

    assert!(matches!(result, Err(BackendError::Timeout(_))));
    assert_eq!(backend.calls(), 3);
}
