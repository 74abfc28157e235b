//! CLI commands
//!
//! Command implementations for the `panto` binary.

mod dashboard;
mod login;
mod logout;
mod progress;
mod style;

pub use dashboard::{run_dashboard, run_interactive, run_toggle};
pub use login::run_login;
pub use logout::run_logout;

use anstream::println;
use panto::config::{ClientConfig, LogoutPolicy};
use panto::context::AppContext;
use panto::error::{Error, Result};
use panto::navigation::{Navigator, Route};
use panto::platform::BackendClient;
use panto::session::{FileStore, Session, default_state_path};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use style::{Stream, Stylize, arrow, hyperlink_url};

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Backend origin
    pub backend_url: String,
    /// Session file override
    pub state_file: Option<PathBuf>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Navigator that tells the user where to go next
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        match route {
            Route::Login => {
                println!("{}", "Not logged in.".warn().for_stdout());
                println!(
                    "{} Run {} or {}",
                    arrow(),
                    "panto login github".accent(),
                    "panto login gitlab".accent()
                );
            }
            Route::Dashboard => {
                println!("{} Run {}", arrow(), "panto dashboard".accent());
            }
            Route::External(url) => {
                println!(
                    "{} Open {} in your browser to continue",
                    arrow(),
                    hyperlink_url(Stream::Stdout, url.as_str())
                );
            }
        }
    }
}

/// Build the application context from global options
///
/// If a provider is already stored and an access token is available in the
/// environment, the token is loaded into the client's cookie jar.
pub fn build_context(options: &GlobalOptions, logout_policy: LogoutPolicy) -> Result<AppContext> {
    let config = ClientConfig::new(&options.backend_url)?
        .with_timeout(options.timeout_secs.map(Duration::from_secs))
        .with_logout_policy(logout_policy);

    let state_path = options
        .state_file
        .clone()
        .or_else(default_state_path)
        .ok_or_else(|| {
            Error::Config("cannot determine a config directory; pass --state-file".into())
        })?;
    tracing::debug!(path = %state_path.display(), "using session file");

    let session = Session::new(Arc::new(FileStore::new(state_path)));
    let backend = BackendClient::new(config)?;

    match session.provider() {
        Ok(Some(provider)) => {
            if let Some(credential) = panto::auth::get_session_credential(&provider) {
                backend.add_session_cookie(&credential);
            } else {
                tracing::debug!(provider, "no access token in environment");
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "session file unreadable, continuing without a session");
        }
    }

    Ok(AppContext::new(session, Arc::new(TerminalNavigator), backend))
}
