//! Login command - remember the provider and start OAuth

use crate::cli::style::{Stylize, check};
use anstream::println;
use panto::auth::{get_session_credential, token_env_var};
use panto::context::AppContext;
use panto::error::Result;
use panto::login::{begin_login, complete_login};
use panto::types::Provider;

/// Run the login command
pub fn run_login(ctx: &AppContext, provider: Provider) -> Result<()> {
    begin_login(ctx, provider.as_str())?;

    println!("{} Provider set to {}", check(), provider.accent());
    println!();

    // A token already in the environment means the session exists
    if get_session_credential(provider.as_str()).is_some() {
        complete_login(ctx)?;
        return Ok(());
    }

    println!(
        "{}",
        "After signing in, export the backend session token so panto can reuse it:".muted()
    );
    println!("  export {}=<token>", token_env_var(provider));
    Ok(())
}
