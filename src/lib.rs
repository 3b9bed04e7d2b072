//! # reports-probe
//!
//! A small smoke-test client for the admin reporting API. It logs in with
//! email/password credentials, keeps the returned bearer token in memory and
//! probes each reporting endpoint once, printing what came back.
//!
//! ```ignore
//! use reports_probe::prelude::*;
//!
//! setup_logger();
//! let config = Config::new();
//! let mut out = std::io::stdout();
//! let summary = run(&config, &mut out).await?;
//! ```

/// Authentication against the token endpoint
pub mod auth;

/// HTTP transport shared by the authenticator and the prober
pub mod client;

/// Connection settings loaded from the environment
pub mod config;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Wire models for requests and responses
pub mod model;

/// Console rendering of probe results
pub mod presentation;

/// Report endpoint probing
pub mod probe;

/// Authenticate-then-probe flow
pub mod application;

/// Environment and logging helpers
pub mod utils;

/// Commonly used types and functions
pub mod prelude;

/// Crate version as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
