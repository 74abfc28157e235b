//! Dashboard commands - render, toggle, interactive loop

use crate::cli::logout::logout;
use crate::cli::progress::CliObserver;
use crate::cli::style::{
    BOX_CHECKED, BOX_EMPTY, Stream, Stylize, checkbox, hyperlink, hyperlink_url,
};
use anstream::println;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use panto::context::AppContext;
use panto::dashboard::{Dashboard, DashboardData, DashboardState, LoadOutcome};
use panto::error::{Error, Result};
use panto::types::Repository;
use std::sync::Arc;

/// Load a dashboard, returning `None` when the user was sent to login
async fn mount(ctx: &AppContext) -> Result<Option<Dashboard>> {
    let dashboard = Dashboard::new(ctx.clone()).with_observer(Arc::new(CliObserver::new()));

    match dashboard.load().await {
        LoadOutcome::Redirected => Ok(None),
        LoadOutcome::Cancelled => Err(Error::Cancelled),
        LoadOutcome::Ready | LoadOutcome::Failed | LoadOutcome::InProgress => {
            if let DashboardState::Failed(message) = dashboard.state() {
                return Err(Error::request(message));
            }
            Ok(Some(dashboard))
        }
    }
}

/// Run the dashboard command: load and print once
pub async fn run_dashboard(ctx: &AppContext) -> Result<()> {
    if let Some(dashboard) = mount(ctx).await? {
        render(&dashboard.state());
    }
    Ok(())
}

/// Run the toggle command for one repository identity
pub async fn run_toggle(ctx: &AppContext, identity: &str) -> Result<()> {
    let Some(dashboard) = mount(ctx).await? else {
        return Ok(());
    };

    let repo = dashboard.find_repository(identity)?;
    let result = dashboard.toggle_review(&repo).await;
    render(&dashboard.state());

    // The observer has already printed the rollback; the exit status still
    // has to reflect it
    match result {
        Ok(_) | Err(Error::Cancelled) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Run the interactive dashboard (default command)
pub async fn run_interactive(ctx: &AppContext) -> anyhow::Result<()> {
    let Some(dashboard) = mount(ctx).await? else {
        return Ok(());
    };
    render(&dashboard.state());

    let theme = ColorfulTheme::default();
    loop {
        let DashboardState::Ready(data) = dashboard.state() else {
            break;
        };

        let mut items: Vec<String> = data
            .repositories
            .iter()
            .map(|repo| {
                let mark = if data.checked.is_checked(repo.identity()) {
                    BOX_CHECKED
                } else {
                    BOX_EMPTY
                };
                format!("{mark} {}", repo.identity())
            })
            .collect();
        let logout_idx = items.len();
        items.push("Log out".to_string());
        items.push("Quit".to_string());

        let choice = Select::with_theme(&theme)
            .with_prompt("Toggle auto review")
            .items(&items)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(i) if i < logout_idx => {
                let repo = data.repositories[i].clone();
                // Rollbacks are reported by the observer
                let _ = dashboard.toggle_review(&repo).await;
            }
            Some(i) if i == logout_idx => {
                logout(&dashboard).await;
                break;
            }
            _ => break,
        }
    }

    Ok(())
}

/// Print the dashboard for its current state
fn render(state: &DashboardState) {
    match state {
        DashboardState::Loading => println!("{}", "Loading...".muted()),
        // Load failures are returned as errors by `mount`
        DashboardState::Failed(_) => {}
        DashboardState::Ready(data) => render_ready(data),
    }
}

fn render_ready(data: &DashboardData) {
    println!("{}", greeting(data).emphasis());
    if let Some(avatar) = data.user.avatar_url.as_deref().filter(|a| !a.is_empty()) {
        println!("{}", hyperlink_url(Stream::Stdout, avatar).muted());
    }
    println!();

    println!("{}", "Repos:".emphasis());
    if data.repositories.is_empty() {
        println!("{}", "No repositories found.".muted());
        return;
    }

    for repo in &data.repositories {
        let checked = data.checked.is_checked(repo.identity());
        println!("  {} {}", checkbox(checked), repository_label(repo).accent());
    }
}

fn greeting(data: &DashboardData) -> String {
    format!("Hi, {}", data.user.name.as_deref().unwrap_or_default())
}

/// Repository identity, linked to its web page when known
fn repository_label(repo: &Repository) -> String {
    repo.url().map_or_else(
        || repo.identity().to_string(),
        |url| hyperlink(Stream::Stdout, repo.identity(), url),
    )
}
