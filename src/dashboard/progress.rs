//! Observer trait for interface-agnostic dashboard updates
//!
//! This trait allows different front ends (terminal, tests, a future web
//! view) to follow the dashboard as it loads and as toggles resolve.

use async_trait::async_trait;
use std::fmt;

/// Dashboard load phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fetching the user profile
    FetchingProfile,
    /// Fetching the repository list
    FetchingRepositories,
    /// Data loaded
    Ready,
    /// Load failed
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchingProfile => write!(f, "Fetching profile"),
            Self::FetchingRepositories => write!(f, "Fetching repositories"),
            Self::Ready => write!(f, "Ready"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Review toggle status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleStatus {
    /// Flag flipped locally, request in flight
    Started,
    /// Backend confirmed the change
    Confirmed,
    /// Backend rejected the change; local flag restored
    RolledBack(String),
}

impl fmt::Display for ToggleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "updating"),
            Self::Confirmed => write!(f, "updated"),
            Self::RolledBack(msg) => write!(f, "reverted: {msg}"),
        }
    }
}

/// Dashboard observer trait
#[async_trait]
pub trait DashboardObserver: Send + Sync {
    /// Called when entering a new load phase
    async fn on_phase(&self, phase: Phase);

    /// Called once when the initial load finishes, successfully or not
    async fn on_loading_finished(&self);

    /// Called as a review toggle progresses
    async fn on_toggle(&self, identity: &str, status: &ToggleStatus);
}

/// No-op observer for tests or when updates aren't needed
pub struct NoopObserver;

#[async_trait]
impl DashboardObserver for NoopObserver {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_loading_finished(&self) {}
    async fn on_toggle(&self, _identity: &str, _status: &ToggleStatus) {}
}
