//! API Link Checker CLI Library
//!
//! This library provides a terminal client for the API link checker backend.
//! It fetches tracked API endpoints grouped by category, renders them as a
//! checklist linked to their Swagger documentation, and persists the checked
//! state of each endpoint back to the server, optionally tagged with the
//! nickname of whoever checked it.
//!
//! # Modules
//!
//! - `backend` - Client side of the checker REST contract (HTTP and in-memory)
//! - `checklist` - Data loading, rendering, filtering and the toggle workflow
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared across the crate
//! - `management` - Durable local identity and the nickname prompt
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use apichecklist::{backend::HttpBackend, checklist::ChecklistController, config};
//!
//! #[tokio::main]
//! async fn main() -> apichecklist::Res<()> {
//!     config::load_env().await?;
//!     let backend = HttpBackend::new(&config::checker_base_url())?;
//!     let mut controller = ChecklistController::new(backend, config::settings());
//!     controller.load_groups().await;
//!     println!("{}", controller.rendered());
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod checklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI glue where errors of different origins (checklist, browser)
/// are only ever reported, never matched on. Library code returns
/// [`error::ChecklistError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loaded {} groups", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("API status updated successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the CLI entry points. Failures inside the checklist
/// workflow are surfaced as notices and never terminate the process.
///
/// # Example
///
/// ```
/// error!("Invalid backend URL: {}", url);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Error updating API status");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
