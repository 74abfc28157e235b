//! Repository source factory
//!
//! Picks the adapter for a stored provider identifier once, at session start.

use crate::platform::{BackendClient, GitHubSource, GitLabSource, RepoSource};
use crate::types::Provider;
use std::sync::Arc;

/// Create the repository source for a provider identifier
pub fn create_repo_source(client: &BackendClient, provider: &str) -> Arc<dyn RepoSource> {
    match Provider::shape_of(provider) {
        Provider::GitLab => Arc::new(GitLabSource::new(client.clone())),
        Provider::GitHub => Arc::new(GitHubSource::new(client.clone(), provider)),
    }
}
