//! Report endpoint probing
//!
//! Each probe is one authorized GET whose response is classified into a
//! [`ProbeOutcome`]. A failing endpoint never stops the ones after it.

use crate::auth::AccessToken;
use crate::client::HttpClient;
use crate::error::AppError;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

/// What a single probe observed
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 200 with a JSON array
    Rows {
        /// Number of elements in the array
        count: usize,
        /// First element, absent for an empty array
        sample: Option<Value>,
    },
    /// 200 with any JSON value other than an array
    Document(Value),
    /// Any status other than 200
    Rejected {
        /// Status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// No usable response: transport error or a 200 body that is not JSON
    Failed(String),
}

impl ProbeOutcome {
    /// Classifies a received response
    #[must_use]
    pub fn from_response(status: StatusCode, body: String) -> Self {
        if status != StatusCode::OK {
            return ProbeOutcome::Rejected { status, body };
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Array(rows)) => ProbeOutcome::Rows {
                count: rows.len(),
                sample: rows.into_iter().next(),
            },
            Ok(value) => ProbeOutcome::Document(value),
            Err(e) => ProbeOutcome::Failed(AppError::from(e).to_string()),
        }
    }

    /// Whether the endpoint answered 200 with JSON
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Rows { .. } | ProbeOutcome::Document(_))
    }

    /// Short label used in the summary table
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ProbeOutcome::Rows { count, .. } => format!("{count} rows"),
            ProbeOutcome::Document(_) => "document".to_string(),
            ProbeOutcome::Rejected { .. } => "error".to_string(),
            ProbeOutcome::Failed(_) => "failed".to_string(),
        }
    }
}

/// Result of probing one endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// Endpoint path as configured
    pub path: String,
    /// Full URL requested
    pub url: String,
    /// Status code, when a response was received
    pub status: Option<StatusCode>,
    /// Classified outcome
    pub outcome: ProbeOutcome,
}

/// Probes report endpoints with a fixed bearer token
pub struct Prober {
    client: HttpClient,
    token: AccessToken,
}

impl Prober {
    /// Creates a prober sending `token` on every request
    pub fn new(client: HttpClient, token: AccessToken) -> Self {
        Self { client, token }
    }

    /// Probes a single endpoint; never fails
    pub async fn probe(&self, path: &str) -> ProbeResult {
        let url = self.client.url(path);

        let (status, outcome) = match self.client.get_authorized(path, &self.token).await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => (Some(status), ProbeOutcome::from_response(status, body)),
                    Err(e) => (
                        Some(status),
                        ProbeOutcome::Failed(AppError::from(e).to_string()),
                    ),
                }
            }
            Err(e) => (None, ProbeOutcome::Failed(e.to_string())),
        };

        match &outcome {
            ProbeOutcome::Rows { count, .. } => info!("{} returned {} rows", url, count),
            ProbeOutcome::Document(_) => info!("{} returned a document", url),
            ProbeOutcome::Rejected { status, .. } => warn!("{} answered {}", url, status),
            ProbeOutcome::Failed(e) => warn!("{} failed: {}", url, e),
        }

        ProbeResult {
            path: path.to_string(),
            url,
            status,
            outcome,
        }
    }

    /// Probes every path in order, handing each result to `on_result` as it arrives
    ///
    /// Stops early only if `on_result` fails.
    pub async fn probe_all<F, E>(
        &self,
        paths: &[&str],
        mut on_result: F,
    ) -> Result<Vec<ProbeResult>, E>
    where
        F: FnMut(&ProbeResult) -> Result<(), E>,
    {
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            debug!("Probing {}", path);
            let result = self.probe(path).await;
            on_result(&result)?;
            results.push(result);
        }
        Ok(results)
    }
}
