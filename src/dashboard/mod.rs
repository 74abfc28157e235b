//! Dashboard screen
//!
//! Loads the user profile and repository list for the stored provider, keeps
//! the per-repository auto review flags, and handles logout.
//!
//! State machine: `Loading -> {Failed | Ready}`. A dashboard never goes back
//! to `Loading`; build a new one to reload.

mod progress;

pub use progress::{DashboardObserver, NoopObserver, Phase, ToggleStatus};

use crate::config::LogoutPolicy;
use crate::context::AppContext;
use crate::error::{Error, Result};
use crate::navigation::Route;
use crate::optimistic::apply_optimistic;
use crate::platform::{RepoSource, create_repo_source};
use crate::types::{CheckedRepos, Repository, UserProfile};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tokio_util::sync::CancellationToken;

/// Loaded dashboard data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    /// Signed-in user
    pub user: UserProfile,
    /// Repositories in backend order
    pub repositories: Vec<Repository>,
    /// Auto review flags by identity
    pub checked: CheckedRepos,
}

/// Dashboard screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardState {
    /// Initial load in progress
    Loading,
    /// Initial load failed with a user-facing message
    Failed(String),
    /// Data loaded
    Ready(DashboardData),
}

/// Result of [`Dashboard::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No session; navigated to login without touching the network
    Redirected,
    /// Data loaded
    Ready,
    /// Load failed; message is in [`DashboardState::Failed`]
    Failed,
    /// Dashboard was unmounted before the load finished
    Cancelled,
    /// Another `load` call is still running
    InProgress,
}

/// Dashboard screen
pub struct Dashboard {
    ctx: AppContext,
    observer: Arc<dyn DashboardObserver>,
    lifetime: CancellationToken,
    state: Mutex<DashboardState>,
    source: OnceLock<Arc<dyn RepoSource>>,
    started: AtomicBool,
}

impl Dashboard {
    /// Create an unloaded dashboard
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            observer: Arc::new(NoopObserver),
            lifetime: CancellationToken::new(),
            state: Mutex::new(DashboardState::Loading),
            source: OnceLock::new(),
            started: AtomicBool::new(false),
        }
    }

    /// Attach an observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn DashboardObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Use `source` instead of picking one from the stored provider at load
    #[must_use]
    pub fn with_repo_source(self, source: Arc<dyn RepoSource>) -> Self {
        let _ = self.source.set(source);
        self
    }

    /// Snapshot of the current state
    pub fn state(&self) -> DashboardState {
        self.lock_state().clone()
    }

    /// Whether the initial load is still pending
    pub fn is_loading(&self) -> bool {
        matches!(*self.lock_state(), DashboardState::Loading)
    }

    /// Provider identifier selected at load time
    pub fn provider(&self) -> Option<&str> {
        self.source.get().map(|source| source.provider())
    }

    /// Whether the dashboard has been unmounted
    pub fn is_unmounted(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    /// Unmount: abandon in-flight requests and ignore their results
    pub fn unmount(&self) {
        tracing::debug!("unmounting dashboard");
        self.lifetime.cancel();
    }

    /// Run the initial load
    ///
    /// Without a stored provider this navigates to login and does nothing
    /// else. Otherwise the profile and then the repository list are fetched,
    /// and the state settles on `Ready` or `Failed`.
    pub async fn load(&self) -> LoadOutcome {
        if self.started.swap(true, Ordering::SeqCst) {
            return self.current_outcome();
        }

        let provider = match self.ctx.session.provider() {
            Ok(Some(provider)) => provider,
            Ok(None) => {
                tracing::debug!("no provider in session, redirecting to login");
                self.ctx.navigator.navigate(Route::Login);
                return LoadOutcome::Redirected;
            }
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable, redirecting to login");
                self.ctx.navigator.navigate(Route::Login);
                return LoadOutcome::Redirected;
            }
        };

        let source = Arc::clone(
            self.source
                .get_or_init(|| create_repo_source(&self.ctx.backend, &provider)),
        );
        tracing::debug!(provider = source.provider(), "loading dashboard");

        let result = self.fetch(source.as_ref()).await;
        if self.is_unmounted() {
            tracing::debug!("dashboard unmounted during load, discarding result");
            return LoadOutcome::Cancelled;
        }

        let outcome = match result {
            Ok(data) => {
                tracing::debug!(repositories = data.repositories.len(), "dashboard ready");
                *self.lock_state() = DashboardState::Ready(data);
                self.observer.on_phase(Phase::Ready).await;
                LoadOutcome::Ready
            }
            Err(Error::Cancelled) => return LoadOutcome::Cancelled,
            Err(e) => {
                tracing::warn!(error = %e, "dashboard load failed");
                *self.lock_state() = DashboardState::Failed(e.to_string());
                self.observer.on_phase(Phase::Failed).await;
                LoadOutcome::Failed
            }
        };

        self.observer.on_loading_finished().await;
        outcome
    }

    async fn fetch(&self, source: &dyn RepoSource) -> Result<DashboardData> {
        self.observer.on_phase(Phase::FetchingProfile).await;
        let user = source.fetch_user(&self.lifetime).await?;

        self.observer.on_phase(Phase::FetchingRepositories).await;
        let repositories = source.list_repositories(&self.lifetime).await?;
        let checked = CheckedRepos::from_repositories(&repositories);

        Ok(DashboardData {
            user,
            repositories,
            checked,
        })
    }

    /// Toggle auto review for a repository
    ///
    /// The flag flips immediately. If the backend rejects the change the flag
    /// is flipped back and the error is returned; nothing else surfaces it.
    pub async fn toggle_review(&self, repo: &Repository) -> Result<Value> {
        if self.is_unmounted() {
            return Err(Error::Cancelled);
        }
        let source = self.source.get().cloned().ok_or(Error::NotLoaded)?;
        if !matches!(*self.lock_state(), DashboardState::Ready(_)) {
            return Err(Error::NotLoaded);
        }

        let identity = source.identity(repo).to_string();
        self.observer
            .on_toggle(&identity, &ToggleStatus::Started)
            .await;

        let flip = |state: &mut DashboardState| {
            if let DashboardState::Ready(data) = state {
                data.checked.flip(&identity);
            }
        };
        let lifetime = &self.lifetime;
        let result = apply_optimistic(
            &self.state,
            flip,
            move |state: &mut DashboardState| {
                if !lifetime.is_cancelled() {
                    flip(state);
                }
            },
            source.toggle_review(repo, &self.lifetime),
        )
        .await;

        match &result {
            Ok(response) => {
                tracing::info!(identity = %identity, %response, "Update successful");
                self.observer
                    .on_toggle(&identity, &ToggleStatus::Confirmed)
                    .await;
            }
            Err(Error::Cancelled) => {
                tracing::debug!(identity = %identity, "toggle abandoned on unmount");
            }
            Err(e) => {
                tracing::error!(identity = %identity, error = %e, "Error toggling review status");
                self.observer
                    .on_toggle(&identity, &ToggleStatus::RolledBack(e.to_string()))
                    .await;
            }
        }

        result
    }

    /// Toggle auto review for the loaded repository with `identity`
    pub async fn toggle_review_by_identity(&self, identity: &str) -> Result<Value> {
        let repo = self.find_repository(identity)?;
        self.toggle_review(&repo).await
    }

    /// Look up a loaded repository by identity
    pub fn find_repository(&self, identity: &str) -> Result<Repository> {
        match &*self.lock_state() {
            DashboardState::Ready(data) => data
                .repositories
                .iter()
                .find(|r| r.identity() == identity)
                .cloned()
                .ok_or_else(|| Error::RepositoryNotFound(identity.to_string())),
            _ => Err(Error::NotLoaded),
        }
    }

    /// Log out
    ///
    /// Calls the backend logout endpoint for the stored provider. On success
    /// the provider is cleared and the user sent to login. On failure the
    /// error is logged and returned; local state is kept unless the policy
    /// is [`LogoutPolicy::AlwaysClear`].
    pub async fn logout(&self) -> Result<()> {
        let result = self.request_logout().await;

        if let Err(e) = &result {
            tracing::error!(error = %e, "Error during logout");
        }

        let clear = result.is_ok() || self.ctx.config().logout_policy == LogoutPolicy::AlwaysClear;
        if clear {
            self.ctx.session.clear_provider()?;
            self.ctx.navigator.navigate(Route::Login);
        }

        result
    }

    async fn request_logout(&self) -> Result<()> {
        let provider = self.ctx.session.provider()?.ok_or(Error::NoSession)?;
        self.ctx.backend.logout(&provider, &self.lifetime).await
    }

    fn current_outcome(&self) -> LoadOutcome {
        match *self.lock_state() {
            DashboardState::Loading => LoadOutcome::InProgress,
            DashboardState::Failed(_) => LoadOutcome::Failed,
            DashboardState::Ready(_) => LoadOutcome::Ready,
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
