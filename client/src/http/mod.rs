//! Authenticated HTTP transport with single-shot refresh-on-401.
//!
//! Every outgoing request attaches the stored access credential as a bearer
//! header. When the server answers 401 and retry is allowed, the client
//! attempts exactly one refresh exchange; on success the original request is
//! retried once with retry disabled, which bounds every call to at most one
//! refresh and one retried request even under persistent 401s. A failed
//! refresh falls through to normal error handling on the original response.
//!
//! Concurrent in-flight requests that each receive a 401 run their own
//! refresh; in-flight refreshes are not de-duplicated.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use ll_core::{TokenPair, TokenStore};

use crate::api::dto::{RefreshRequest, RefreshResponse};
use crate::config::ClientConfig;
use crate::errors::ClientError;

/// Authenticated client for the platform API
///
/// Owns the HTTP connection pool, the client configuration, and the injected
/// token store. Cloning is cheap and clones share the connection pool and the
/// store.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Creates a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - Base origin, timeout, and user agent
    /// * `store` - Token storage backend holding the session credential pair
    ///
    /// # Returns
    ///
    /// A new `ApiClient`, or a configuration error if the base origin is not
    /// an http(s) URL or the underlying HTTP client cannot be built
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        crate::config::ensure_http_origin(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ClientError::Config {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        info!("API client initialized for {}", config.base_url);

        Ok(Self {
            http,
            config,
            store,
        })
    }

    /// The configured base API origin
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The injected token store
    pub fn store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    /// Issues an authenticated GET and parses the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, None::<&()>, HeaderMap::new(), true)
            .await
    }

    /// Issues an authenticated POST with a JSON body and parses the response
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), HeaderMap::new(), true)
            .await
    }

    /// Issues a request with the full retry policy
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base origin, with a leading slash
    /// * `body` - Optional JSON body
    /// * `headers` - Caller-supplied headers; these win over the defaults
    /// * `allow_retry` - Whether a 401 may trigger the refresh-and-retry
    ///   policy; login and registration pass `false` since no valid session
    ///   exists yet
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: HeaderMap,
        allow_retry: bool,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut response = self.dispatch(method.clone(), path, body, &headers).await?;

        if response.status() == StatusCode::UNAUTHORIZED && allow_retry {
            if self.refresh_session().await {
                debug!(%method, path, "retrying with refreshed credentials");
                response = self.dispatch(method, path, body, &headers).await?;
            }
            // Refresh failed: fall through with the original 401 response.
        }

        Self::parse_response(response).await
    }

    /// Sends a single request with default headers and the bearer credential
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        extra_headers: &HeaderMap,
    ) -> Result<Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(pair) = self.store.get().await? {
            let bearer = format!("Bearer {}", pair.access_token);
            let value = HeaderValue::from_str(&bearer).map_err(|_| ClientError::Validation {
                message: "stored access token contains invalid header characters".to_string(),
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        // Caller-supplied headers win on conflict.
        for (name, value) in extra_headers {
            headers.insert(name.clone(), value.clone());
        }

        debug!(%method, path, "dispatching request");

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    /// Exchanges the stored refresh credential for a new pair
    ///
    /// Returns `true` when both stored credentials were replaced. Every
    /// failure mode - no stored refresh credential, transport failure,
    /// non-success status, a body missing either credential, or a store write
    /// failure - reports `false` without raising, leaving the previously
    /// stored pair untouched so the caller can surface the original response.
    async fn refresh_session(&self) -> bool {
        let refresh_token = match self.store.get().await {
            Ok(Some(pair)) => pair.refresh_token,
            Ok(None) => {
                debug!("no refresh credential stored, skipping refresh");
                return false;
            }
            Err(err) => {
                warn!("token store read failed during refresh: {}", err);
                return false;
            }
        };

        let url = format!("{}/auth/refresh", self.config.base_url);
        let request = RefreshRequest { refresh_token };

        let response = match self.http.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("credential refresh failed at transport level: {}", err);
                return false;
            }
        };

        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                "credential refresh rejected by server"
            );
            return false;
        }

        let body: RefreshResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                warn!("credential refresh returned an unreadable body: {}", err);
                return false;
            }
        };

        let pair = match body.into_pair() {
            Some(pair) => pair,
            None => {
                warn!("credential refresh response did not carry a full token pair");
                return false;
            }
        };

        if let Err(err) = self.store.put(pair).await {
            warn!("failed to persist refreshed credentials: {}", err);
            return false;
        }

        debug!("session credentials refreshed");
        true
    }

    /// Replaces the stored pair after a successful login or registration
    pub(crate) async fn install_session(&self, pair: TokenPair) -> Result<(), ClientError> {
        self.store.put(pair).await?;
        Ok(())
    }

    /// Removes the stored pair during logout
    pub(crate) async fn clear_session(&self) -> Result<(), ClientError> {
        self.store.clear().await?;
        Ok(())
    }

    /// Maps a response to a typed result
    ///
    /// Non-success statuses become [`ClientError::RequestFailed`] carrying
    /// the body text; success bodies that do not match `T` become
    /// [`ClientError::MalformedResponse`].
    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::request_failed(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            ClientError::malformed(format!(
                "response body did not match the expected shape: {}",
                err
            ))
        })
    }
}
