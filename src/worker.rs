//! Optional background worker registered at startup

use async_trait::async_trait;
use log::{info, warn};

use crate::error::Error;

/// A background worker (offline cache, push handler, ...) the host can install
#[async_trait]
pub trait BackgroundWorker: Send + Sync {
    /// Register the worker and return its scope
    async fn register(&self) -> Result<String, Error>;
}

/// Register `worker`, logging the outcome. Failures are swallowed.
pub async fn register_worker(worker: &dyn BackgroundWorker) -> Option<String> {
    match worker.register().await {
        Ok(scope) => {
            info!("Background worker registration successful: {}", scope);
            Some(scope)
        }
        Err(e) => {
            warn!("Background worker registration failed: {}", e);
            None
        }
    }
}
