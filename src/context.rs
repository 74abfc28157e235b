//! Application context shared by the screens

use crate::config::ClientConfig;
use crate::navigation::Navigator;
use crate::platform::BackendClient;
use crate::session::Session;
use std::sync::Arc;

/// Everything a screen needs: session, navigation and backend access
#[derive(Clone)]
pub struct AppContext {
    /// Session context (provider identifier)
    pub session: Session,
    /// Navigation adapter
    pub navigator: Arc<dyn Navigator>,
    /// Backend client
    pub backend: BackendClient,
}

impl AppContext {
    /// Bundle the collaborators
    pub fn new(session: Session, navigator: Arc<dyn Navigator>, backend: BackendClient) -> Self {
        Self {
            session,
            navigator,
            backend,
        }
    }

    /// Client configuration
    pub const fn config(&self) -> &ClientConfig {
        self.backend.config()
    }
}
