//! Session credentials for the Panto backend
//!
//! In a browser the backend's OAuth callback leaves a session cookie behind.
//! A terminal has no such cookie, so the access token is read from the
//! environment and replayed under the cookie name the backend expects.

use crate::types::{GITLAB, Provider};
use std::env;

/// Source of the session credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Provider-specific environment variable
    ProviderEnvVar,
    /// Generic `PANTO_ACCESS_TOKEN` environment variable
    EnvVar,
}

/// Access token to be sent as the backend session cookie
#[derive(Clone)]
pub struct SessionCredential {
    /// Cookie name the backend reads the token from
    pub cookie_name: &'static str,
    /// Access token value
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

impl SessionCredential {
    /// `name=value` form suitable for a cookie jar
    pub fn cookie(&self) -> String {
        format!("{}={}", self.cookie_name, self.token)
    }
}

impl std::fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredential")
            .field("cookie_name", &self.cookie_name)
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Cookie carrying the access token for a provider identifier
pub fn cookie_name(provider: &str) -> &'static str {
    if provider == GITLAB {
        "accessToken"
    } else {
        "gh-accessToken"
    }
}

/// Environment variable holding a provider-specific token
pub const fn token_env_var(provider: Provider) -> &'static str {
    match provider {
        Provider::GitHub => "PANTO_GITHUB_TOKEN",
        Provider::GitLab => "PANTO_GITLAB_TOKEN",
    }
}

/// Get the session credential for a provider identifier
///
/// Priority:
/// 1. `PANTO_GITHUB_TOKEN` / `PANTO_GITLAB_TOKEN`
/// 2. `PANTO_ACCESS_TOKEN`
pub fn get_session_credential(provider: &str) -> Option<SessionCredential> {
    let cookie_name = cookie_name(provider);

    if let Some(token) = read_token(token_env_var(Provider::shape_of(provider))) {
        return Some(SessionCredential {
            cookie_name,
            token,
            source: AuthSource::ProviderEnvVar,
        });
    }

    read_token("PANTO_ACCESS_TOKEN").map(|token| SessionCredential {
        cookie_name,
        token,
        source: AuthSource::EnvVar,
    })
}

fn read_token(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_names_follow_backend() {
        assert_eq!(cookie_name("github"), "gh-accessToken");
        assert_eq!(cookie_name("gitlab"), "accessToken");
        assert_eq!(cookie_name("other"), "gh-accessToken");
    }

    #[test]
    fn test_cookie_format() {
        let credential = SessionCredential {
            cookie_name: "accessToken",
            token: "abc".to_string(),
            source: AuthSource::EnvVar,
        };
        assert_eq!(credential.cookie(), "accessToken=abc");
        assert!(!format!("{credential:?}").contains("abc"));
    }
}
