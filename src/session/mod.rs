//! Session context
//!
//! The session is the provider identifier kept in client-local persistent
//! storage: set at login, read by the dashboard, cleared at logout. Storage
//! is injected through [`SessionStore`].

mod store;

pub use store::{FileStore, MemoryStore, default_state_path};

use crate::error::Result;
use std::sync::Arc;

/// Storage key holding the provider identifier
pub const PROVIDER_KEY: &str = "provider";

/// Key/value persistence for client-local state
pub trait SessionStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value (no-op if absent)
    fn remove(&self, key: &str) -> Result<()>;
}

/// Session context shared by the login and dashboard screens
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Create a session over a store
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Stored provider identifier; empty values count as absent
    pub fn provider(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(PROVIDER_KEY)?
            .filter(|provider| !provider.is_empty()))
    }

    /// Store the provider identifier as given
    pub fn set_provider(&self, provider: &str) -> Result<()> {
        tracing::debug!(provider, "storing session provider");
        self.store.set(PROVIDER_KEY, provider)
    }

    /// Forget the provider identifier
    pub fn clear_provider(&self) -> Result<()> {
        tracing::debug!("clearing session provider");
        self.store.remove(PROVIDER_KEY)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Arc::new(MemoryStore::default()))
    }

    #[test]
    fn test_provider_roundtrip_and_clear() {
        let session = session();
        assert_eq!(session.provider().unwrap(), None);

        session.set_provider("gitlab").unwrap();
        assert_eq!(session.provider().unwrap().as_deref(), Some("gitlab"));

        session.clear_provider().unwrap();
        assert_eq!(session.provider().unwrap(), None);
    }

    #[test]
    fn test_empty_provider_is_absent() {
        let session = session();
        session.set_provider("").unwrap();
        assert_eq!(session.provider().unwrap(), None);
    }

    #[test]
    fn test_provider_is_not_validated() {
        let session = session();
        session.set_provider("bitbucket").unwrap();
        assert_eq!(session.provider().unwrap().as_deref(), Some("bitbucket"));
    }
}
