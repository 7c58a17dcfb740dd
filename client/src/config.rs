//! Client configuration and environment selection.

use std::env;
use std::time::Duration;

use crate::errors::ClientError;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment environment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development server
    Development,
    /// Staging deployment
    Staging,
    /// Production deployment
    Production,
}

impl Environment {
    /// Check if targeting production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Check if targeting local development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Get environment from ENV variable
    pub fn from_env() -> Self {
        env::var("LAUNCHLAB_ENV")
            .or_else(|_| env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| String::from("development"))
            .parse()
            .unwrap_or(Environment::Development)
    }

    /// Get the default API origin for this environment
    pub fn default_base_url(&self) -> &str {
        match self {
            Environment::Development => "http://localhost:5000/api",
            Environment::Staging => "https://staging-api.launchlab.io/api",
            Environment::Production => "https://api.launchlab.io/api",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API origin, without a trailing slash
    pub base_url: String,
    /// Timeout applied to every request
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for an explicit API origin
    ///
    /// A trailing slash on `base_url` is stripped so paths can always be
    /// joined with a leading slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }

    /// Creates a configuration targeting the given environment's default origin
    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.default_base_url())
    }

    /// Create configuration from environment variables
    ///
    /// `LAUNCHLAB_API_URL` overrides the origin selected by `LAUNCHLAB_ENV`;
    /// `LAUNCHLAB_TIMEOUT_SECS` overrides the default request timeout.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = match env::var("LAUNCHLAB_API_URL") {
            Ok(url) => url,
            Err(_) => Environment::from_env().default_base_url().to_string(),
        };

        ensure_http_origin(&base_url)?;

        let timeout_secs = env::var("LAUNCHLAB_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs)))
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_user_agent() -> String {
    format!("launchlab-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Checks that `base_url` is an http(s) origin
///
/// Shared by `ClientConfig::from_env` and the client constructor, so a bad
/// origin is rejected the same way regardless of how the config was built.
pub(crate) fn ensure_http_origin(base_url: &str) -> Result<(), ClientError> {
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        Ok(())
    } else {
        Err(ClientError::Config {
            message: format!("base URL must be an http(s) origin, got: {}", base_url),
        })
    }
}
