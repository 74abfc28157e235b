//! GitLab-shaped repository source

use crate::error::Result;
use crate::platform::client::FAILED_REPOSITORIES;
use crate::platform::{BackendClient, RepoSource, extract_repositories};
use crate::types::{GITLAB, Repository, UserProfile};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Envelope field holding the repository list
const REPOS_FIELD: &str = "repos";

/// GitLab-shaped source
pub struct GitLabSource {
    client: BackendClient,
}

/// GitLab toggles by project ID; the name rides along
#[derive(Debug, Serialize)]
struct ReviewPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    name: &'a str,
}

impl GitLabSource {
    /// Create a GitLab source
    pub const fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepoSource for GitLabSource {
    fn provider(&self) -> &str {
        GITLAB
    }

    async fn fetch_user(&self, cancel: &CancellationToken) -> Result<UserProfile> {
        self.client.fetch_user(GITLAB, cancel).await
    }

    async fn list_repositories(&self, cancel: &CancellationToken) -> Result<Vec<Repository>> {
        let body = self
            .client
            .get_json(GITLAB, "/dashboard/repo", FAILED_REPOSITORIES, cancel)
            .await?;
        extract_repositories(body, REPOS_FIELD)
    }

    async fn toggle_review(&self, repo: &Repository, cancel: &CancellationToken) -> Result<Value> {
        let payload = ReviewPayload {
            id: repo.id,
            name: self.identity(repo),
        };
        self.client.post_review(GITLAB, &payload, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_payload_shape() {
        let payload = ReviewPayload {
            id: Some(42),
            name: "proj",
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"id": 42, "name": "proj"})
        );
    }

    #[test]
    fn test_review_payload_omits_unknown_id() {
        let payload = ReviewPayload {
            id: None,
            name: "proj",
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"name": "proj"}));
    }
}
