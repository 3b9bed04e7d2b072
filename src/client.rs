//! HTTP transport for the admin API
//!
//! Thin wrapper over a single `reqwest` client that knows the base URL and
//! how to attach the bearer token. Status handling is left to the callers:
//! the authenticator treats any non-2xx as a failure, while the prober needs
//! to see every status and body as-is.

use crate::auth::AccessToken;
use crate::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, error};

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for the configured base URL
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to send requests
    /// * `Err(AppError)` - If the underlying TLS backend cannot be initialised
    pub fn new(rest_api: &RestApiConfig) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http_client,
            base_url: rest_api.base_url.clone(),
        })
    }

    /// Base URL every path is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends a POST with a JSON body and returns the raw response
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AppError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Sends a GET carrying `Authorization: Bearer <token>` and returns the raw response
    pub async fn get_authorized(
        &self,
        path: &str,
        token: &AccessToken,
    ) -> Result<Response, AppError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, token.bearer())
            .send()
            .await?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Passes 2xx responses through and turns anything else into [`AppError::Rejected`]
    pub async fn ensure_success(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        Err(AppError::Rejected { status, body })
    }
}
