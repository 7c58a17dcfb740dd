//! Wire DTOs for the platform API endpoints.
//!
//! The wire format is camelCase JSON. Response envelopes are parsed into
//! explicit shapes and checked field-by-field, so a body that only looks
//! right fails fast as a typed error instead of being trusted at runtime.

use serde::{Deserialize, Serialize};
use validator::Validate;

use ll_core::{TokenPair, User};

use crate::errors::ClientError;

/// Body for `POST /auth/register`
#[derive(Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Body for `POST /auth/login`
#[derive(Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Body for `POST /auth/refresh`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Envelope returned by `POST /auth/login` and `POST /auth/register`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl SessionResponse {
    /// Extracts the credential pair and user from a session envelope
    ///
    /// # Returns
    ///
    /// * `Ok((TokenPair, User))` - The envelope carried a full session
    /// * `Err(ClientError::MalformedResponse)` - The success flag was false
    ///   or a credential/user field was missing
    pub fn into_session(self) -> Result<(TokenPair, User), ClientError> {
        if !self.success {
            return Err(ClientError::malformed(
                "session envelope flagged failure despite a success status",
            ));
        }

        match (self.token, self.refresh_token, self.user) {
            (Some(token), Some(refresh_token), Some(user)) => {
                Ok((TokenPair::new(token, refresh_token), user))
            }
            _ => Err(ClientError::malformed(
                "session envelope missing token, refreshToken, or user",
            )),
        }
    }
}

/// Envelope returned by `POST /auth/refresh`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl RefreshResponse {
    /// Extracts the replacement pair, or `None` if the envelope is unusable
    ///
    /// Refresh failures are not errors at this layer; the transport treats
    /// `None` as "refresh failed" and falls through to the original response.
    pub fn into_pair(self) -> Option<TokenPair> {
        if !self.success {
            return None;
        }
        match (self.token, self.refresh_token) {
            (Some(token), Some(refresh_token)) => Some(TokenPair::new(token, refresh_token)),
            _ => None,
        }
    }
}

/// Envelope returned by `GET /auth/me`
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl MeResponse {
    /// Extracts the session user from the envelope
    pub fn into_user(self) -> Result<User, ClientError> {
        if !self.success {
            return Err(ClientError::malformed(
                "session envelope flagged failure despite a success status",
            ));
        }
        self.user
            .ok_or_else(|| ClientError::malformed("session envelope missing user"))
    }
}

/// Envelope returned by `GET /analytics/platform`
///
/// The payload shape is owned by the dashboards and changes with them, so it
/// is carried as raw JSON rather than a typed struct.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}
