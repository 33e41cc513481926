//! Client core for submitting coordinate batches to the points service and
//! keeping the shared map state in sync with its answer.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod input;
pub mod store;
pub mod view;
pub mod workflow;

pub use api::{HttpPointsClient, PointsApi};
pub use config::{ClientSettings, SettingsError};
pub use input::{parse_coordinates, ParsedInput};
pub use store::{CoordinateStore, MapState};
pub use view::{MapView, MarkerView, Viewport};
pub use workflow::{SubmissionStatus, SubmissionWorkflow};

/// Wires a workflow to a fresh store and an HTTP client for the configured
/// service.
pub fn connect(settings: &ClientSettings) -> anyhow::Result<Arc<SubmissionWorkflow>> {
    let base_url = settings.api_base_url()?;
    let client = HttpPointsClient::new(&base_url)?;
    tracing::info!(endpoint = %client.endpoint(), "points client ready");
    Ok(Arc::new(SubmissionWorkflow::new(
        Arc::new(CoordinateStore::new()),
        Arc::new(client),
    )))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
