//! Application startup and utilities.
//!
//! Exit codes, tracing setup, and error hints for the entry point.

use nssm_wrap::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - bad arguments, missing name, invalid options.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - NSSM failed or could not be run.
    ///
    /// A function because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::SERVICE_NAME => {
            eprintln!("\nRun 'nssm-wrap init' to generate a service definition template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'nssm-wrap init' to generate a service definition template.");
        }
        ConfigError::Validation(_) => {
            eprintln!("\nRun 'nssm-wrap show' to check options without touching the service.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output (status, option values) stays
/// clean on stdout.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
