//! Navigation adapter
//!
//! Screens never drive a browser or terminal directly; they ask a
//! [`Navigator`] to go somewhere.

use url::Url;

/// A navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The login screen
    Login,
    /// The dashboard screen
    Dashboard,
    /// Full navigation to an external URL (e.g. backend OAuth entry point)
    External(Url),
}

/// Something that can move the user between screens
pub trait Navigator: Send + Sync {
    /// Navigate to a route
    fn navigate(&self, route: Route);
}
