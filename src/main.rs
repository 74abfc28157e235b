//! panto - review dashboard client
//!
//! CLI binary for signing in to the Panto backend and managing per-repository
//! auto review.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use panto::config::{DEFAULT_BACKEND_URL, LogoutPolicy};
use panto::types::Provider;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "panto")]
#[command(about = "Auto review dashboard - GitHub & GitLab")]
#[command(version)]
struct Cli {
    /// Backend origin
    #[arg(long, global = true, env = "PANTO_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Session file (defaults to <config dir>/panto/session.json)
    #[arg(long, global = true, env = "PANTO_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a provider
    Login {
        /// Provider to sign in with
        provider: LoginProvider,
    },

    /// Show the dashboard
    Dashboard,

    /// Toggle auto review for a repository
    Toggle {
        /// Repository identity (full name on GitHub, name on GitLab)
        repo: String,
    },

    /// Sign out
    Logout {
        /// Clear the local session even if the backend logout fails
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LoginProvider {
    Github,
    Gitlab,
}

impl From<LoginProvider> for Provider {
    fn from(value: LoginProvider) -> Self {
        match value {
            LoginProvider::Github => Self::GitHub,
            LoginProvider::Gitlab => Self::GitLab,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "panto=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = cli::GlobalOptions {
        backend_url: cli.backend_url,
        state_file: cli.state_file,
        timeout_secs: cli.timeout,
    };

    let policy = match cli.command {
        Some(Commands::Logout { force: true }) => LogoutPolicy::AlwaysClear,
        _ => LogoutPolicy::RequireConfirmation,
    };
    let ctx = cli::build_context(&options, policy)?;

    match cli.command {
        None => {
            // Default: interactive mode
            cli::run_interactive(&ctx).await?;
        }
        Some(Commands::Login { provider }) => {
            cli::run_login(&ctx, provider.into())?;
        }
        Some(Commands::Dashboard) => {
            cli::run_dashboard(&ctx).await?;
        }
        Some(Commands::Toggle { repo }) => {
            cli::run_toggle(&ctx, &repo).await?;
        }
        Some(Commands::Logout { .. }) => {
            cli::run_logout(&ctx).await?;
        }
    }

    Ok(())
}
