//! Authentication operations: register, login, session lookup, logout.

use reqwest::header::HeaderMap;
use reqwest::Method;
use tracing::{debug, info, warn};
use validator::Validate;

use ll_core::User;

use crate::api::dto::{LoginRequest, MeResponse, RegisterRequest, SessionResponse};
use crate::errors::ClientError;
use crate::http::ApiClient;

impl ApiClient {
    /// Registers a new account and establishes a session
    ///
    /// The request is issued with retry disabled: a failing registration must
    /// never trigger a credential refresh, since no valid session exists yet.
    /// The returned credential pair is stored only on success.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name for the new account
    /// * `email` - Account email, used as the login identifier
    /// * `password` - Account password
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created account; the session pair is now stored
    /// * `Err(ClientError)` - Validation, transport, or server failure
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate().map_err(|err| ClientError::Validation {
            message: err.to_string(),
        })?;

        let response: SessionResponse = self
            .request(Method::POST, "/auth/register", Some(&request), HeaderMap::new(), false)
            .await?;

        self.establish_session(response).await
    }

    /// Authenticates with email and password and establishes a session
    ///
    /// Issued with retry disabled for the same reason as [`Self::register`].
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate().map_err(|err| ClientError::Validation {
            message: err.to_string(),
        })?;

        let response: SessionResponse = self
            .request(Method::POST, "/auth/login", Some(&request), HeaderMap::new(), false)
            .await?;

        self.establish_session(response).await
    }

    /// Fetches the current session's user
    pub async fn me(&self) -> Result<User, ClientError> {
        let response: MeResponse = self.get("/auth/me").await?;
        response.into_user()
    }

    /// Ends the session
    ///
    /// The remote invalidation call is best-effort: its outcome, including a
    /// transport failure, never blocks the local teardown. The stored
    /// credential pair is cleared unconditionally.
    pub async fn logout(&self) -> Result<(), ClientError> {
        match self
            .post::<_, serde_json::Value>("/auth/logout", &serde_json::json!({}))
            .await
        {
            Ok(_) => debug!("server session invalidated"),
            Err(err) => warn!("best-effort remote logout failed: {}", err),
        }

        self.clear_session().await?;
        info!("local session cleared");
        Ok(())
    }

    /// Stores the credential pair from a session envelope and returns the user
    async fn establish_session(&self, response: SessionResponse) -> Result<User, ClientError> {
        let (pair, user) = response.into_session()?;
        self.install_session(pair).await?;
        info!(user_id = %user.id, "session established");
        Ok(user)
    }
}
