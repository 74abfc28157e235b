//! GitHub-shaped repository source

use crate::error::Result;
use crate::platform::client::FAILED_REPOSITORIES;
use crate::platform::{BackendClient, RepoSource, extract_repositories};
use crate::types::{Repository, UserProfile};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Envelope field holding the repository list
const REPOS_FIELD: &str = "user";

/// GitHub-shaped source
///
/// Serves `"github"` and, since the backend contract only singles out
/// GitLab, any other stored provider identifier.
pub struct GitHubSource {
    client: BackendClient,
    provider: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewPayload<'a> {
    repo_full_name: &'a str,
}

impl GitHubSource {
    /// Create a GitHub-shaped source for a provider identifier
    pub fn new(client: BackendClient, provider: impl Into<String>) -> Self {
        Self {
            client,
            provider: provider.into(),
        }
    }
}

#[async_trait]
impl RepoSource for GitHubSource {
    fn provider(&self) -> &str {
        &self.provider
    }

    async fn fetch_user(&self, cancel: &CancellationToken) -> Result<UserProfile> {
        self.client.fetch_user(&self.provider, cancel).await
    }

    async fn list_repositories(&self, cancel: &CancellationToken) -> Result<Vec<Repository>> {
        let body = self
            .client
            .get_json(&self.provider, "/dashboard/repo", FAILED_REPOSITORIES, cancel)
            .await?;
        extract_repositories(body, REPOS_FIELD)
    }

    async fn toggle_review(&self, repo: &Repository, cancel: &CancellationToken) -> Result<Value> {
        let payload = ReviewPayload {
            repo_full_name: self.identity(repo),
        };
        self.client.post_review(&self.provider, &payload, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_payload_shape() {
        let payload = ReviewPayload {
            repo_full_name: "octo/hello",
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"repoFullName": "octo/hello"})
        );
    }
}
