//! # Prelude
//!
//! ```rust
//! use reports_probe::prelude::*;
//!
//! let config = Config::with("http://localhost:8093/api", Credentials::new("a@b.c", "secret"));
//! assert_eq!(config.rest_api.base_url, "http://localhost:8093/api");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND PROBING
// ============================================================================

pub use crate::application::{RunSummary, run, run_with_endpoints};
pub use crate::auth::{AccessToken, Auth};
pub use crate::client::HttpClient;
pub use crate::probe::{ProbeOutcome, ProbeResult, Prober};

// ============================================================================
// MODELS AND PRESENTATION
// ============================================================================

pub use crate::model::requests::TokenRequest;
pub use crate::model::responses::TokenResponse;
pub use crate::presentation::{ProbeSummary, write_probe};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::constants::*;
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use tracing::{debug, error, info, warn};
