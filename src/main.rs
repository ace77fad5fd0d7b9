//! nssm-wrap: typed service configuration for NSSM
//!
//! Entry point for the nssm-wrap application.

use nssm_wrap::config::{
    Cli, Command, ServiceDefinition, load_toml, resolve_options, write_default_config,
};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Command::Init { output } => return handle_init(output),
        Command::Show { .. } => return handle_show(&cli),
        _ => {}
    }

    let definition = match ServiceDefinition::load(&cli) {
        Ok(definition) => definition,
        Err(e) => return config_failure(&e),
    };

    setup_tracing(definition.verbose);
    tracing::debug!("{definition}");

    match run::execute(&cli.command, definition) {
        Ok(()) => exit_code::SUCCESS,
        Err(run::RunError::Config(e)) => config_failure(&e),
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `show` subcommand: validates options and prints them.
///
/// Needs no service name and never runs NSSM.
fn handle_show(cli: &Cli) -> ExitCode {
    let configuration = load_toml(cli).and_then(|toml| resolve_options(cli, toml.as_ref()));

    match configuration {
        Ok(configuration) => {
            print!("{}", configuration.pretty_print());
            exit_code::SUCCESS
        }
        Err(e) => config_failure(&e),
    }
}

fn config_failure(error: &nssm_wrap::config::ConfigError) -> ExitCode {
    eprintln!("Configuration error: {error}");
    print_config_hint(error);
    exit_code::CONFIG_ERROR
}
