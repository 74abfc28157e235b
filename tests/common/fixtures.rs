//! Test collaborators and data factories
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use panto::config::{ClientConfig, LogoutPolicy};
use panto::context::AppContext;
use panto::dashboard::{DashboardObserver, Phase, ToggleStatus};
use panto::navigation::{Navigator, Route};
use panto::platform::BackendClient;
use panto::session::{MemoryStore, Session};
use panto::types::Repository;
use std::sync::{Arc, Mutex};

/// Navigator that records every route it is asked for
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// All routes navigated to, in order
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Observer that records phases, load completions and toggle statuses
#[derive(Default)]
pub struct RecordingObserver {
    phases: Mutex<Vec<Phase>>,
    loading_finished: Mutex<usize>,
    toggles: Mutex<Vec<(String, ToggleStatus)>>,
}

impl RecordingObserver {
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    pub fn loading_finished_count(&self) -> usize {
        *self.loading_finished.lock().unwrap()
    }

    pub fn toggles(&self) -> Vec<(String, ToggleStatus)> {
        self.toggles.lock().unwrap().clone()
    }
}

#[async_trait]
impl DashboardObserver for RecordingObserver {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_loading_finished(&self) {
        *self.loading_finished.lock().unwrap() += 1;
    }

    async fn on_toggle(&self, identity: &str, status: &ToggleStatus) {
        self.toggles
            .lock()
            .unwrap()
            .push((identity.to_string(), status.clone()));
    }
}

/// A context wired to in-memory collaborators
pub struct TestContext {
    pub ctx: AppContext,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestContext {
    /// Context against `backend_url` with an optional stored provider
    pub fn new(backend_url: &str, provider: Option<&str>) -> Self {
        Self::with_policy(backend_url, provider, LogoutPolicy::RequireConfirmation)
    }

    /// Same as [`TestContext::new`] with an explicit logout policy
    pub fn with_policy(backend_url: &str, provider: Option<&str>, policy: LogoutPolicy) -> Self {
        let config = ClientConfig::new(backend_url)
            .unwrap()
            .with_logout_policy(policy);
        let session = Session::new(Arc::new(MemoryStore::default()));
        if let Some(provider) = provider {
            session.set_provider(provider).unwrap();
        }

        let navigator = Arc::new(RecordingNavigator::default());
        let backend = BackendClient::new(config).unwrap();
        let ctx = AppContext::new(session, navigator.clone(), backend);

        Self { ctx, navigator }
    }

    /// Provider currently stored in the session
    pub fn stored_provider(&self) -> Option<String> {
        self.ctx.session.provider().unwrap()
    }
}

/// A GitHub-shaped repository
pub fn github_repo(id: u64, full_name: &str, review: Option<bool>) -> Repository {
    Repository {
        id: Some(id),
        full_name: Some(full_name.to_string()),
        html_url: Some(format!("https://github.com/{full_name}")),
        review,
        ..Repository::default()
    }
}

/// A GitLab-shaped repository
pub fn gitlab_repo(id: u64, name: &str, review: Option<bool>) -> Repository {
    Repository {
        id: Some(id),
        name: Some(name.to_string()),
        web_url: Some(format!("https://gitlab.com/group/{name}")),
        review,
        ..Repository::default()
    }
}
