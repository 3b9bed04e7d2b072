use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body returned by `POST /auth/token`
///
/// Only `access_token` is needed; everything else the server adds is ignored.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TokenResponse {
    /// Bearer token for the report endpoints
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, usually `Bearer`
    #[serde(default)]
    pub token_type: Option<String>,
}
