//! Core of the MyWork campus portal: demo-account sessions, seeded mock
//! campus data, and the selection logic behind each role's dashboard.

pub mod catalog;
pub mod generator;
pub mod session;
pub mod settings;
pub mod types;
pub mod views;

use std::env;
use tracing_subscriber::EnvFilter;

pub use catalog::Catalog;
pub use generator::MockGenerator;
pub use session::{SessionError, SessionResolver};
pub use settings::{Settings, SettingsError};
pub use types::{ParseRoleError, Role, User};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `LOG_LEVEL` (default `info`) is used.
pub fn init_logging() {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level = level.to_lowercase();

    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
