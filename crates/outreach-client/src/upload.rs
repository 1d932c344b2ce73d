//! Simulated brief upload.
//!
//! No file content is read or sent. Progress climbs by [`PROGRESS_STEP`] per
//! tick until it reaches 100, then an "Uploaded Brief" is fabricated and made
//! the active brief.

use std::time::Duration;

use chrono::Local;
use outreach_core::ClientBrief;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::FlowError;
use crate::session::ActiveBrief;

pub const PROGRESS_STEP: u8 = 10;
pub const DEFAULT_TICK: Duration = Duration::from_millis(300);

/// A running simulated upload.
///
/// Dropping the handle aborts the task, so a caller that goes away early
/// leaves no timer behind.
#[derive(Debug)]
pub struct UploadTask {
    progress: watch::Receiver<u8>,
    handle: Option<JoinHandle<ClientBrief>>,
}

impl UploadTask {
    /// Spawns the upload on the current tokio runtime.
    #[must_use]
    pub fn start(tick: Duration, store: ActiveBrief) -> Self {
        let tick = tick.max(Duration::from_millis(1));
        let (tx, rx) = watch::channel(0u8);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // The first tick of an interval completes immediately.
            interval.tick().await;

            let mut progress = 0u8;
            while progress < 100 {
                interval.tick().await;
                progress = progress.saturating_add(PROGRESS_STEP).min(100);
                tx.send_replace(progress);
                tracing::debug!(progress, "brief upload progress");
            }

            let brief = ClientBrief::uploaded(Local::now());
            store.set(brief.clone());
            brief
        });

        Self {
            progress: rx,
            handle: Some(handle),
        }
    }

    /// Progress in percent, 0 to 100.
    #[must_use]
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    /// Stops the upload. The active brief is left untouched unless the upload
    /// had already completed.
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
            tracing::info!("brief upload cancelled");
        }
    }

    /// Waits for the upload to finish.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Cancelled`] if the upload was cancelled first.
    pub async fn wait(mut self) -> Result<ClientBrief, FlowError> {
        let Some(handle) = self.handle.take() else {
            return Err(FlowError::Cancelled);
        };
        match handle.await {
            Ok(brief) => Ok(brief),
            Err(err) if err.is_cancelled() => Err(FlowError::Cancelled),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

impl Drop for UploadTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
