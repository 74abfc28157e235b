//! Provider adapters for the Panto backend
//!
//! The backend speaks a slightly different dialect per provider: the
//! repository list lives under a different envelope field and the review
//! toggle takes a different body. Each dialect is a [`RepoSource`].

mod client;
mod factory;
mod github;
mod gitlab;

pub use client::{
    BackendClient, FAILED_LOGOUT, FAILED_REPOSITORIES, FAILED_TOGGLE, FAILED_USER_DETAILS,
    cancellable,
};
pub use factory::create_repo_source;
pub use github::GitHubSource;
pub use gitlab::GitLabSource;

use crate::error::{Error, Result};
use crate::types::{Repository, UserProfile};
use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Repository source trait for dashboard operations
///
/// This trait abstracts the GitHub- and GitLab-shaped backend endpoints,
/// allowing the same dashboard logic to work with either provider.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Provider identifier used in backend paths
    fn provider(&self) -> &str;

    /// Fetch the signed-in user's profile
    async fn fetch_user(&self, cancel: &CancellationToken) -> Result<UserProfile>;

    /// List the user's repositories in backend order
    async fn list_repositories(&self, cancel: &CancellationToken) -> Result<Vec<Repository>>;

    /// Toggle auto review for a repository, returning the backend's response
    async fn toggle_review(&self, repo: &Repository, cancel: &CancellationToken) -> Result<Value>;

    /// Key of a repository in the checked-state map
    fn identity<'a>(&self, repo: &'a Repository) -> &'a str {
        repo.identity()
    }
}

/// Pull the repository list out of a response envelope
///
/// A missing field is an error; an explicit `null` is an empty list.
fn extract_repositories(mut body: Value, field: &'static str) -> Result<Vec<Repository>> {
    match body.get_mut(field).map(Value::take) {
        None => Err(Error::Envelope(field)),
        Some(Value::Null) => Ok(Vec::new()),
        Some(repos) => Ok(serde_json::from_value(repos)?),
    }
}
