//! Mock repository source for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use panto::error::{Error, Result};
use panto::platform::{RepoSource, cancellable};
use panto::types::{Repository, UserProfile};
use serde_json::{Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

/// Mock repository source
///
/// Features:
/// - Canned profile and repository list
/// - Call tracking for verification
/// - Error injection for failure path testing
/// - Gates that hold a call open until released
pub struct MockRepoSource {
    provider: String,
    user: UserProfile,
    repos: Vec<Repository>,
    // Call tracking
    fetch_user_calls: Mutex<usize>,
    toggle_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_fetch_user: Mutex<Option<String>>,
    error_on_toggle: Mutex<Option<String>>,
    // Gates
    hold_fetch_user: AtomicBool,
    hold_toggle: AtomicBool,
    release: Notify,
}

impl MockRepoSource {
    /// Create a mock serving `repos` for `provider`
    pub fn new(provider: &str, repos: Vec<Repository>) -> Self {
        Self {
            provider: provider.to_string(),
            user: UserProfile {
                name: Some("Test User".to_string()),
                avatar_url: Some("https://example.com/avatar.png".to_string()),
                id: Some(1),
            },
            repos,
            fetch_user_calls: Mutex::new(0),
            toggle_calls: Mutex::new(Vec::new()),
            error_on_fetch_user: Mutex::new(None),
            error_on_toggle: Mutex::new(None),
            hold_fetch_user: AtomicBool::new(false),
            hold_toggle: AtomicBool::new(false),
            release: Notify::new(),
        }
    }

    // === Error injection methods ===

    /// Make `fetch_user` return an error
    pub fn fail_fetch_user(&self, msg: &str) {
        *self.error_on_fetch_user.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `toggle_review` return an error
    pub fn fail_toggle(&self, msg: &str) {
        *self.error_on_toggle.lock().unwrap() = Some(msg.to_string());
    }

    // === Gates ===

    /// Hold `fetch_user` until [`MockRepoSource::release`]
    pub fn hold_fetch_user(&self) {
        self.hold_fetch_user.store(true, Ordering::SeqCst);
    }

    /// Hold `toggle_review` until [`MockRepoSource::release`]
    pub fn hold_toggle(&self) {
        self.hold_toggle.store(true, Ordering::SeqCst);
    }

    /// Let one held call proceed
    pub fn release(&self) {
        self.release.notify_one();
    }

    // === Call verification methods ===

    pub fn fetch_user_calls(&self) -> usize {
        *self.fetch_user_calls.lock().unwrap()
    }

    pub fn toggle_calls(&self) -> Vec<String> {
        self.toggle_calls.lock().unwrap().clone()
    }

    async fn gate(&self, held: &AtomicBool, cancel: &CancellationToken) -> Result<()> {
        if held.load(Ordering::SeqCst) {
            cancellable(cancel, async {
                self.release.notified().await;
                Ok::<_, Error>(())
            })
            .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl RepoSource for MockRepoSource {
    fn provider(&self) -> &str {
        &self.provider
    }

    async fn fetch_user(&self, cancel: &CancellationToken) -> Result<UserProfile> {
        *self.fetch_user_calls.lock().unwrap() += 1;
        self.gate(&self.hold_fetch_user, cancel).await?;

        let injected = self.error_on_fetch_user.lock().unwrap().clone();
        if let Some(msg) = injected {
            return Err(Error::request(msg));
        }
        Ok(self.user.clone())
    }

    async fn list_repositories(&self, _cancel: &CancellationToken) -> Result<Vec<Repository>> {
        Ok(self.repos.clone())
    }

    async fn toggle_review(&self, repo: &Repository, cancel: &CancellationToken) -> Result<Value> {
        self.toggle_calls
            .lock()
            .unwrap()
            .push(self.identity(repo).to_string());
        self.gate(&self.hold_toggle, cancel).await?;

        let injected = self.error_on_toggle.lock().unwrap().clone();
        if let Some(msg) = injected {
            return Err(Error::request(msg));
        }
        Ok(json!({"ok": true}))
    }
}
