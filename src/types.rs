//! Core types for panto

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Provider identifier for GitHub
pub const GITHUB: &str = "github";
/// Provider identifier for GitLab
pub const GITLAB: &str = "gitlab";

/// Code-hosting platform the user authenticates against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// GitHub
    GitHub,
    /// GitLab
    GitLab,
}

impl Provider {
    /// Identifier used in storage and backend paths
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => GITHUB,
            Self::GitLab => GITLAB,
        }
    }

    /// Response/request shape for a stored identifier.
    ///
    /// Only `"gitlab"` selects the GitLab shape; every other value is served
    /// the GitHub shape.
    pub fn shape_of(id: &str) -> Self {
        if id == GITLAB {
            Self::GitLab
        } else {
            Self::GitHub
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Provider-side user ID
    #[serde(default)]
    pub id: Option<u64>,
}

/// A repository as reported by the backend
///
/// GitHub repositories carry `full_name`/`html_url`, GitLab ones
/// `name`/`web_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Provider-side repository ID
    #[serde(default)]
    pub id: Option<u64>,
    /// `owner/name` (GitHub)
    #[serde(default)]
    pub full_name: Option<String>,
    /// Project name (GitLab)
    #[serde(default)]
    pub name: Option<String>,
    /// Web URL (GitLab)
    #[serde(default)]
    pub web_url: Option<String>,
    /// Web URL (GitHub)
    #[serde(default)]
    pub html_url: Option<String>,
    /// Whether auto review is enabled server-side
    #[serde(default)]
    pub review: Option<bool>,
}

impl Repository {
    /// Key of this repository in the checked-state map
    pub fn identity(&self) -> &str {
        non_empty(self.full_name.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .unwrap_or_default()
    }

    /// Browser URL, whichever field the provider filled in
    pub fn url(&self) -> Option<&str> {
        non_empty(self.web_url.as_deref()).or_else(|| non_empty(self.html_url.as_deref()))
    }

    /// Server-reported review flag, defaulting to off
    pub fn review_enabled(&self) -> bool {
        self.review.unwrap_or(false)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Identity -> auto review flag for the listed repositories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedRepos(HashMap<String, bool>);

impl CheckedRepos {
    /// Derive the map from a freshly fetched repository list
    ///
    /// A later repository with the same identity overwrites an earlier one.
    pub fn from_repositories(repos: &[Repository]) -> Self {
        Self(
            repos
                .iter()
                .map(|r| (r.identity().to_string(), r.review_enabled()))
                .collect(),
        )
    }

    /// Checked state for an identity (unknown identities are unchecked)
    pub fn is_checked(&self, identity: &str) -> bool {
        self.0.get(identity).copied().unwrap_or(false)
    }

    /// Invert the flag for an identity, inserting it as checked if unknown
    pub fn flip(&mut self, identity: &str) {
        let entry = self.0.entry(identity.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Number of tracked identities
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no identities are tracked
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over tracked identities and their flags
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
