//! Client configuration

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Backend origin used when none is configured
pub const DEFAULT_BACKEND_URL: &str = "https://panto-backend-production.up.railway.app";

/// What logout does with local session state when the backend call fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoutPolicy {
    /// Clear local state only after the backend confirms the logout
    #[default]
    RequireConfirmation,
    /// Clear local state and return to login whatever the backend says
    AlwaysClear,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://panto.example.com`
    pub backend_url: Url,
    /// Per-request timeout (None waits indefinitely)
    pub request_timeout: Option<Duration>,
    /// Logout cleanup policy
    pub logout_policy: LogoutPolicy,
}

impl ClientConfig {
    /// Create a configuration for a backend origin
    pub fn new(backend_url: &str) -> Result<Self> {
        let backend_url = Url::parse(backend_url)?;
        if backend_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "backend URL must be an http(s) origin: {backend_url}"
            )));
        }

        Ok(Self {
            backend_url,
            request_timeout: None,
            logout_policy: LogoutPolicy::default(),
        })
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the logout policy
    #[must_use]
    pub const fn with_logout_policy(mut self, policy: LogoutPolicy) -> Self {
        self.logout_policy = policy;
        self
    }

    /// Build `{backend}/{provider}{path}`
    pub fn endpoint(&self, provider: &str, path: &str) -> String {
        format!(
            "{}/{provider}{path}",
            self.backend_url.as_str().trim_end_matches('/')
        )
    }

    /// Backend URL that starts the OAuth flow for a provider
    pub fn authorize_url(&self, provider: &str) -> Result<Url> {
        Ok(Url::parse(&self.endpoint(provider, ""))?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            request_timeout: None,
            logout_policy: LogoutPolicy::default(),
        }
    }
}
