//! Logout command

use crate::cli::style::{Stylize, check};
use anstream::{eprintln, println};
use panto::context::AppContext;
use panto::dashboard::Dashboard;
use panto::error::Result;

/// Run the logout command
///
/// Logout failures are reported but do not fail the command.
pub async fn run_logout(ctx: &AppContext) -> Result<()> {
    let dashboard = Dashboard::new(ctx.clone());
    logout(&dashboard).await;
    Ok(())
}

/// Log out through a dashboard and report the result
pub async fn logout(dashboard: &Dashboard) {
    match dashboard.logout().await {
        Ok(()) => println!("{} Logged out", check()),
        Err(e) => eprintln!("{}: {}", "logout failed".error(), e),
    }
}
