//! Submission workflow: raw text to validated points, remote call, and
//! reconciliation of the shared map state.

use std::sync::Arc;

use shared::{error::SubmissionError, protocol::PointsSummary};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{api::PointsApi, input::parse_coordinates, store::CoordinateStore};

pub const SUCCESS_MESSAGE: &str = "Points submitted successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) | Self::Failed(message) => Some(message),
            Self::Idle | Self::Loading => None,
        }
    }
}

pub struct SubmissionWorkflow {
    store: Arc<CoordinateStore>,
    api: Arc<dyn PointsApi>,
    input: watch::Sender<String>,
    status: watch::Sender<SubmissionStatus>,
}

impl SubmissionWorkflow {
    pub fn new(store: Arc<CoordinateStore>, api: Arc<dyn PointsApi>) -> Self {
        let (input, _) = watch::channel(String::new());
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            store,
            api,
            input,
            status,
        }
    }

    pub fn store(&self) -> &Arc<CoordinateStore> {
        &self.store
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    pub fn input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().is_loading()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.borrow().is_empty()
    }

    pub fn can_clear(&self) -> bool {
        !self.is_loading()
    }

    /// Replaces the pending text and drops any stale status message.
    /// Ignored while a submission is in flight.
    pub fn set_input(&self, text: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.input.send_replace(text.into());
        self.status.send_if_modified(|status| {
            if status.message().is_some() {
                *status = SubmissionStatus::Idle;
                true
            } else {
                false
            }
        });
        true
    }

    pub async fn submit_input(&self) -> SubmissionStatus {
        let raw = self.input();
        self.submit(&raw).await
    }

    /// Runs one submission cycle and returns the terminal status.
    ///
    /// A call made while another submission is loading is rejected and
    /// returns `Loading` without touching the store.
    pub async fn submit(&self, raw: &str) -> SubmissionStatus {
        let entered = self.status.send_if_modified(|status| {
            if status.is_loading() {
                false
            } else {
                *status = SubmissionStatus::Loading;
                true
            }
        });
        if !entered {
            warn!("submission rejected: another submission is in flight");
            return SubmissionStatus::Loading;
        }

        let outcome = match self.run(raw).await {
            Ok(()) => SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_string()),
            Err(err) if err.is_local() => {
                info!(error = %err, "submission rejected before sending");
                SubmissionStatus::Failed(err.to_string())
            }
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "submission failed");
                SubmissionStatus::Failed(err.to_string())
            }
        };
        self.status.send_replace(outcome.clone());
        outcome
    }

    async fn run(&self, raw: &str) -> Result<(), SubmissionError> {
        let parsed = parse_coordinates(raw)?;
        info!(
            candidates = parsed.candidate_count,
            valid = parsed.coordinates.len(),
            rejected = parsed.rejected_count(),
            "submitting coordinates"
        );

        // Not rolled back on failure: the attempted points stay visible.
        self.store.reset_for_submission(parsed.coordinates.clone());

        let body = self.api.submit_points(&parsed.coordinates).await?;
        match PointsSummary::from_response(&body) {
            Some(summary) => {
                info!(
                    south = summary.bounds.south(),
                    west = summary.bounds.west(),
                    north = summary.bounds.north(),
                    east = summary.bounds.east(),
                    "reconciled server bounds"
                );
                self.store.reconcile(summary.bounds, summary.centroid);
            }
            None => info!("response carried no bounds/centroid; keeping points only"),
        }
        Ok(())
    }

    /// Resets the text, the map state and the status line.
    /// Ignored while a submission is in flight.
    pub fn clear(&self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.input.send_replace(String::new());
        self.store.clear_all();
        self.status.send_replace(SubmissionStatus::Idle);
        true
    }
}

#[cfg(test)]
#[path = "tests/workflow_tests.rs"]
mod tests;
