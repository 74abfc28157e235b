//! HTTP client for the Panto backend
//!
//! All calls are credentialed (cookie jar) and race the caller's
//! cancellation token.

use crate::auth::SessionCredential;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::UserProfile;
use reqwest::cookie::Jar;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Message for a failed profile fetch
pub const FAILED_USER_DETAILS: &str = "Failed to fetch user details";
/// Message for a failed repository fetch
pub const FAILED_REPOSITORIES: &str = "Failed to fetch repositories";
/// Message for a failed review toggle
pub const FAILED_TOGGLE: &str = "Failed to toggle review status";
/// Message for a failed logout
pub const FAILED_LOGOUT: &str = "Logout failed";

/// Shared backend client (cheap to clone)
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    jar: Arc<Jar>,
    config: ClientConfig,
}

impl BackendClient {
    /// Create a client for the configured backend
    pub fn new(config: ClientConfig) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder().cookie_provider(Arc::clone(&jar));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            jar,
            config,
        })
    }

    /// Client configuration
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Seed the cookie jar with a session credential for the backend origin
    pub fn add_session_cookie(&self, credential: &SessionCredential) {
        tracing::debug!(
            cookie = credential.cookie_name,
            source = ?credential.source,
            "adding session cookie"
        );
        self.jar
            .add_cookie_str(&credential.cookie(), &self.config.backend_url);
    }

    /// GET `/{provider}/dashboard` and return the `user` field
    ///
    /// A response without a `user` field yields an empty profile.
    pub async fn fetch_user(
        &self,
        provider: &str,
        cancel: &CancellationToken,
    ) -> Result<UserProfile> {
        let mut body = self
            .get_json(provider, "/dashboard", FAILED_USER_DETAILS, cancel)
            .await?;

        match body.get_mut("user").map(Value::take) {
            None | Some(Value::Null) => Ok(UserProfile::default()),
            Some(user) => Ok(serde_json::from_value(user)?),
        }
    }

    /// GET `/{provider}/logout`
    pub async fn logout(&self, provider: &str, cancel: &CancellationToken) -> Result<()> {
        let request = self.http.get(self.config.endpoint(provider, "/logout"));
        self.send(request, FAILED_LOGOUT, cancel).await?;
        Ok(())
    }

    /// POST `/{provider}/review` with a JSON body, returning the response JSON
    ///
    /// A 2xx response confirms the toggle even when its body is not JSON.
    pub async fn post_review<B: Serialize + Sync>(
        &self,
        provider: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        let request = self
            .http
            .post(self.config.endpoint(provider, "/review"))
            .json(body);
        let response = self.send(request, FAILED_TOGGLE, cancel).await?;

        let text =
            cancellable(cancel, async move { Ok::<_, Error>(response.text().await?) }).await?;
        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "review response is not JSON");
            Value::String(text)
        }))
    }

    /// GET `/{provider}{path}` and decode the JSON body
    pub async fn get_json(
        &self,
        provider: &str,
        path: &str,
        failure: &str,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        let request = self.http.get(self.config.endpoint(provider, path));
        let response = self.send(request, failure, cancel).await?;
        cancellable(cancel, async move { Ok::<_, Error>(response.json::<Value>().await?) }).await
    }

    /// Send a request, collapsing transport errors and non-2xx statuses
    /// into `failure`
    async fn send(
        &self,
        request: RequestBuilder,
        failure: &str,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        let response = cancellable(cancel, async move {
            request.send().await.map_err(|e| {
                tracing::debug!(error = %e, "backend request failed");
                Error::request(failure)
            })
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %response.url(), %status, "backend returned error status");
            return Err(Error::Request {
                message: failure.to_string(),
                status: Some(status.as_u16()),
            });
        }

        Ok(response)
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("backend_url", &self.config.backend_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Run `fut` unless `cancel` fires first (an already-cancelled token wins)
pub async fn cancellable<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}
