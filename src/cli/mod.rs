//! # CLI Module
//!
//! This module provides the command-line interface layer for apichecklist. Each
//! command builds a [`ChecklistController`] over the HTTP backend, runs one or
//! more steps of the checklist workflow and prints the result.
//!
//! ## Commands
//!
//! - [`list`] - Loads the checklist and prints it, optionally for one group
//! - [`groups`] - Prints the group filter options with their progress
//! - [`check`] - Checks or unchecks one API and prints the reloaded list
//! - [`nickname`] - Shows, sets or resets the local nickname
//! - [`open`] - Opens the Swagger documentation of one API in the browser
//! - [`shell`] - Interactive session over a single loaded checklist
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (commands, prompts, spinners)
//!     ↓
//! Checklist Layer (controller: load, render, filter, toggle)
//!     ↓
//! Backend Layer (HTTP calls to the checker)
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! apichecklist nickname set alice             # who is checking
//! apichecklist list --group Pets              # what is left to check
//! apichecklist check --method GET --path /pets
//! apichecklist open --method GET --path /pets # read the docs first
//! apichecklist shell                          # all of the above, interactively
//! ```
//!
//! Failures of the backend are shown as notices and never abort a command
//! halfway; only an unusable configuration terminates the program.

mod check;
mod list;
mod nickname;
mod open;
mod shell;

pub use check::check;
pub use list::groups;
pub use list::list;
pub use nickname::NicknameAction;
pub use nickname::nickname;
pub use open::open;
pub use shell::shell;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    backend::HttpBackend,
    checklist::ChecklistController,
    config, error,
    management::{IdentityManager, IdentityPrompt},
};

/// Builds a controller for the configured backend and stored identity.
async fn session() -> ChecklistController<HttpBackend> {
    let base_url = config::checker_base_url();
    let backend = match HttpBackend::new(&base_url) {
        Ok(b) => b,
        Err(e) => error!("Cannot use APICHECK_BASE_URL. Err: {}", e),
    };

    let prompt = IdentityPrompt::load(IdentityManager::new()).await;
    ChecklistController::new(backend, config::settings()).with_identity(prompt)
}

/// Runs a load cycle behind a spinner.
async fn load(controller: &mut ChecklistController<HttpBackend>) -> bool {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching API groups...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let loaded = controller.load_groups().await;
    pb.finish_and_clear();
    loaded
}

fn normalize_method(method: &str) -> String {
    method.trim().to_uppercase()
}
