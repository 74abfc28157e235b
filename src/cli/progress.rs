//! Terminal dashboard observer with a loading spinner

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use panto::dashboard::{DashboardObserver, Phase, ToggleStatus};
use std::time::Duration;

/// Shows a spinner while the dashboard loads and one line per toggle result
pub struct CliObserver {
    spinner: ProgressBar,
}

impl CliObserver {
    /// Create an observer with a hidden spinner (shown on first phase)
    pub fn new() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }
}

impl Default for CliObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardObserver for CliObserver {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::FetchingProfile | Phase::FetchingRepositories => {
                if self.spinner.is_hidden() {
                    self.spinner
                        .set_draw_target(indicatif::ProgressDrawTarget::stderr());
                    self.spinner.set_style(spinner_style());
                    self.spinner.enable_steady_tick(Duration::from_millis(80));
                }
                self.spinner.set_message(format!("{phase}..."));
            }
            Phase::Ready | Phase::Failed => {}
        }
    }

    async fn on_loading_finished(&self) {
        self.spinner.finish_and_clear();
    }

    async fn on_toggle(&self, identity: &str, status: &ToggleStatus) {
        match status {
            ToggleStatus::Started => {}
            ToggleStatus::Confirmed => {
                println!(
                    "{} Auto review {} for {}",
                    check(),
                    status.success(),
                    identity.accent()
                );
            }
            ToggleStatus::RolledBack(_) => {
                eprintln!(
                    "{} {} {}",
                    cross(),
                    identity.accent().for_stderr(),
                    status.to_string().warn()
                );
            }
        }
    }
}
