//! Remote points-processing endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use shared::{
    domain::Coordinate,
    error::{SubmissionError, MISSING_SERVER_MESSAGE, UNKNOWN_SERVER_ERROR_MESSAGE},
    protocol::{ServerErrorBody, SubmitPointsRequest, POINTS_PATH},
};
use tracing::{debug, warn};
use url::Url;

#[async_trait]
pub trait PointsApi: Send + Sync {
    /// Submits one batch and returns the success body untouched.
    async fn submit_points(&self, points: &[Coordinate]) -> Result<Value, SubmissionError>;
}

/// Single-attempt HTTP client: no retries, no timeout.
#[derive(Debug, Clone)]
pub struct HttpPointsClient {
    http: Client,
    endpoint: Url,
}

impl HttpPointsClient {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Ok(Self::with_client(Client::new(), points_endpoint(base_url)?))
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PointsApi for HttpPointsClient {
    async fn submit_points(&self, points: &[Coordinate]) -> Result<Value, SubmissionError> {
        debug!(endpoint = %self.endpoint, points = points.len(), "posting points");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SubmitPointsRequest::new(points))
            .send()
            .await
            .map_err(|err| SubmissionError::Network(error_chain(&err)))?;

        let status = response.status();
        if !status.is_success() {
            let message = server_error_message(response.json::<Value>().await.ok());
            warn!(status = status.as_u16(), %message, "points service rejected submission");
            return Err(server_error(status, message));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| SubmissionError::MalformedResponse(err.to_string()))
    }
}

/// Resolves `{base}/points`, keeping any path prefix on the base URL.
pub fn points_endpoint(base_url: &Url) -> anyhow::Result<Url> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(POINTS_PATH)?)
}

/// Top-level message followed by each underlying cause, so connect failures
/// keep their reason.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn server_error(status: StatusCode, message: String) -> SubmissionError {
    SubmissionError::Server {
        status: status.as_u16(),
        message,
    }
}

fn server_error_message(body: Option<Value>) -> String {
    let Some(body) = body else {
        return UNKNOWN_SERVER_ERROR_MESSAGE.to_string();
    };
    serde_json::from_value::<ServerErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| MISSING_SERVER_MESSAGE.to_string())
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
