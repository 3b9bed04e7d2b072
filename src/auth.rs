//! Authentication against the admin API
//!
//! A single password-grant login against `POST /auth/token`. The returned
//! access token is kept in memory for the lifetime of the process; it is
//! never refreshed or persisted.

use crate::client::HttpClient;
use crate::config::Credentials;
use crate::constants::TOKEN_PATH;
use crate::error::AppError;
use crate::model::requests::TokenRequest;
use crate::model::responses::TokenResponse;
use std::fmt;
use std::io::Write;
use tracing::{debug, info, warn};

/// Bearer token returned by a successful login
///
/// Never empty: construction goes through [`AccessToken::new`].
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token string, rejecting empty values
    pub fn new(token: impl Into<String>) -> Result<Self, AppError> {
        let token = token.into();
        if token.is_empty() {
            return Err(AppError::MissingToken {
                body: String::new(),
            });
        }
        Ok(Self(token))
    }

    /// Raw token value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"***").finish()
    }
}

/// Performs the password-grant login
pub struct Auth {
    client: HttpClient,
    credentials: Credentials,
}

impl Auth {
    /// Creates an authenticator sending `credentials` through `client`
    pub fn new(client: HttpClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Full URL of the token endpoint
    #[must_use]
    pub fn token_url(&self) -> String {
        self.client.url(TOKEN_PATH)
    }

    /// Logs in and returns the access token
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - Non-empty token from the response
    /// * `Err(AppError)` - Transport failure, non-2xx status, undecodable body
    ///   or a response without a usable `access_token`
    pub async fn login(&self) -> Result<AccessToken, AppError> {
        let request = TokenRequest::from(&self.credentials);

        debug!("Sending login request for {}", self.credentials.email);
        let response = self.client.post_json(TOKEN_PATH, &request).await?;
        let response = HttpClient::ensure_success(response).await?;

        let body = response.text().await?;
        let json: TokenResponse = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(source) => return Err(AppError::InvalidBody { source, body }),
        };

        if let Some(token_type) = &json.token_type {
            debug!("Token type: {}", token_type);
        }

        let token = match json.access_token.map(AccessToken::new) {
            Some(Ok(token)) => token,
            _ => return Err(AppError::MissingToken { body }),
        };
        info!("✓ Login successful for {}", self.credentials.email);
        Ok(token)
    }

    /// Logs in and reports the outcome on `out`
    ///
    /// Login failures are printed and turned into `None`; only failures to
    /// write to `out` are returned as errors.
    pub async fn authenticate<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<Option<AccessToken>, AppError> {
        writeln!(out, "Logging in to {}...", self.token_url())?;

        match self.login().await {
            Ok(token) => {
                writeln!(out, "Login successful.")?;
                Ok(Some(token))
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                writeln!(out, "Login failed: {e}")?;
                if let Some(body) = e.body() {
                    writeln!(out, "{body}")?;
                }
                Ok(None)
            }
        }
    }
}
