use crate::constants::{DEFAULT_BASE_URL, DEFAULT_EMAIL, DEFAULT_PASSWORD, GRANT_TYPE_PASSWORD};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Login credentials for the admin API
pub struct Credentials {
    /// Email of the admin account
    pub email: String,
    /// Password of the admin account
    pub password: String,
    /// OAuth-style grant type, always `password` for this API
    pub grant_type: String,
}

impl Credentials {
    /// Builds password-grant credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            grant_type: GRANT_TYPE_PASSWORD.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .field("grant_type", &self.grant_type)
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
}

impl RestApiConfig {
    /// Creates a REST configuration, dropping any trailing `/` from the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// Main configuration for the probe
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment, reading `.env` first if present
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("REPORTS_EMAIL", String::from(DEFAULT_EMAIL));
        let password = get_env_or_default("REPORTS_PASSWORD", String::from(DEFAULT_PASSWORD));
        let base_url = get_env_or_default("REPORTS_BASE_URL", String::from(DEFAULT_BASE_URL));

        if email == DEFAULT_EMAIL {
            error!("REPORTS_EMAIL not found in environment variables or .env file");
        }
        if password == DEFAULT_PASSWORD {
            error!("REPORTS_PASSWORD not found in environment variables or .env file");
        }

        Self::with(base_url, Credentials::new(email, password))
    }

    /// Builds a configuration from explicit values
    pub fn with(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::new(base_url),
        }
    }
}
