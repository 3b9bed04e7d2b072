use crate::config::Credentials;
use serde::Serialize;

/// Body of `POST /auth/token`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenRequest<'a> {
    /// Account email
    pub email: &'a str,
    /// Account password
    pub password: &'a str,
    /// Grant type, `password`
    pub grant_type: &'a str,
}

impl<'a> From<&'a Credentials> for TokenRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
            grant_type: &credentials.grant_type,
        }
    }
}
