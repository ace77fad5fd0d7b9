//! Command execution.
//!
//! Maps a parsed subcommand onto the [`Service`] operation that implements
//! it and returns whatever should be printed.

use thiserror::Error;

use nssm_wrap::config::{Command, ConfigError, ServiceDefinition};
use nssm_wrap::service::{Service, ServiceError};
use nssm_wrap::wrapper::{Invoker, NssmProcess};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The definition lacks something this command needs.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The service operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Executes `command` against the service described by `definition`.
///
/// # Errors
///
/// Returns an error if the command needs an application path that was not
/// given, or if NSSM fails.
#[cfg(not(tarpaulin_include))]
pub fn execute(command: &Command, definition: ServiceDefinition) -> Result<(), RunError> {
    let process = NssmProcess::new(&definition.executable);
    let mut service = build_service(command, definition, process)?;

    if let Some(output) = dispatch(command, &mut service)? {
        println!("{output}");
    }
    Ok(())
}

/// Creates the service for `command`.
///
/// Only `install` requires an application path; other commands tolerate
/// its absence. `configure` starts from an empty configuration since
/// `dispatch` applies the definition's options itself.
fn build_service<I: Invoker>(
    command: &Command,
    definition: ServiceDefinition,
    invoker: I,
) -> Result<Service<I>, RunError> {
    let path = match command {
        Command::Install { .. } => definition.require_path()?.to_string(),
        _ => definition.path.clone().unwrap_or_default(),
    };

    let service = Service::with_invoker(definition.name, path, invoker);
    Ok(match command {
        Command::Install { .. } | Command::Configure { .. } => {
            service.with_configuration(definition.configuration)
        }
        _ => service,
    })
}

/// Runs one service command, returning text to print, if any.
///
/// # Errors
///
/// Returns the service error unchanged.
fn dispatch<I: Invoker>(
    command: &Command,
    service: &mut Service<I>,
) -> Result<Option<String>, RunError> {
    let name = service.name().to_string();

    match command {
        Command::Install { .. } => {
            service.install()?;
            tracing::info!(service = %name, "Service installed");
        }
        Command::Remove => {
            service.remove()?;
            tracing::info!(service = %name, "Service removed");
        }
        Command::Start => service.start()?,
        Command::Stop => service.stop()?,
        Command::Restart => service.restart()?,
        Command::Pause => service.pause()?,
        Command::Resume => service.resume()?,
        Command::Rotate => service.rotate()?,
        Command::Edit => service.edit()?,
        Command::Status => return Ok(Some(service.status()?.to_string())),
        Command::Get { key } => return Ok(Some(service.get(key)?)),
        Command::Configure { .. } => {
            let configuration = service.configuration().clone();
            if configuration.is_empty() {
                tracing::warn!(service = %name, "No options to apply");
            } else {
                service.configure(&configuration)?;
            }
        }
        Command::Init { .. } | Command::Show { .. } => {
            tracing::debug!("Command does not target a service");
        }
    }

    Ok(None)
}
