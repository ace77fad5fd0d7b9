//! Service façade over NSSM commands.
//!
//! This module provides:
//! - The [`Service`] type owning a name, an application path, and a
//!   [`ServiceConfiguration`], with one method per NSSM command
//! - Translation of options into `nssm set` calls ([`set_arguments`])
//! - Status parsing ([`ServiceStatus`], [`parse_status`])
//!
//! Every call is synchronous and blocks until NSSM exits. Failures are
//! never retried here.

mod apply;
mod status;

#[cfg(test)]
mod service_tests;

pub use apply::{set_arguments, to_argument};
pub use status::{ServiceStatus, parse_status};

use thiserror::Error;

use crate::config::{RawMap, ServiceConfiguration, ValidationError};
use crate::error::{ErrorKind, NssmError, resolve};
use crate::params::param_name;
use crate::wrapper::{Invocation, InvokeError, Invoker, NssmProcess};

/// Error type for service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// NSSM ran and reported a failure.
    #[error(transparent)]
    Nssm(#[from] NssmError),

    /// NSSM could not be run.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// Raw options failed validation; nothing was sent to NSSM.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// NSSM reported success but printed no recognizable status.
    #[error("[{service}] Unrecognized status output: {output}")]
    UnknownStatus {
        /// Service that was queried
        service: String,
        /// What NSSM printed
        output: String,
    },

    /// The option key has no NSSM parameter.
    #[error("[{service}] Unknown option '{key}'")]
    UnknownOption {
        /// Service that was queried
        service: String,
        /// The rejected key
        key: String,
    },
}

impl ServiceError {
    /// Kind of the NSSM failure, if this error came from NSSM.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Nssm(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// A service managed by NSSM.
///
/// Creating a `Service` does not touch the system; [`Service::install`]
/// registers it. The configuration held here tracks what has been applied
/// through this value, not what the service registry currently contains.
///
/// # Type Parameters
///
/// - `I`: The invoker running NSSM (defaults to [`NssmProcess`])
#[derive(Debug)]
pub struct Service<I = NssmProcess> {
    name: String,
    path: String,
    configuration: ServiceConfiguration,
    invoker: I,
}

impl Service<NssmProcess> {
    /// Creates a service driven by the given NSSM executable.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, process: NssmProcess) -> Self {
        Self::with_invoker(name, path, process)
    }
}

impl<I> Service<I> {
    /// Creates a service with an empty configuration and a custom invoker.
    #[must_use]
    pub fn with_invoker(name: impl Into<String>, path: impl Into<String>, invoker: I) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            configuration: ServiceConfiguration::new(),
            invoker,
        }
    }

    /// Creates a service from raw options.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any recognized option is malformed.
    pub fn from_options(
        name: impl Into<String>,
        path: impl Into<String>,
        options: &RawMap,
        invoker: I,
    ) -> Result<Self, ValidationError> {
        let configuration = ServiceConfiguration::from_raw(options)?;
        Ok(Self::with_invoker(name, path, invoker).with_configuration(configuration))
    }

    /// Sets the configuration that `install` applies.
    #[must_use]
    pub fn with_configuration(mut self, configuration: ServiceConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Configuration accumulated by construction and `configure` calls.
    #[must_use]
    pub const fn configuration(&self) -> &ServiceConfiguration {
        &self.configuration
    }

    #[must_use]
    pub const fn invoker(&self) -> &I {
        &self.invoker
    }
}

impl<I: Invoker> Service<I> {
    /// Registers the service, then applies the attached configuration.
    ///
    /// # Errors
    ///
    /// Returns the first NSSM failure; a failed `set` leaves the service
    /// installed and partly configured.
    pub fn install(&mut self) -> Result<(), ServiceError> {
        tracing::info!(service = %self.name, path = %self.path, "Installing service");
        let path = self.path.clone();
        self.run("install", &[path])?;

        if !self.configuration.is_empty() {
            let configuration = self.configuration.clone();
            self.configure(&configuration)?;
        }
        Ok(())
    }

    /// Unregisters the service without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if NSSM fails.
    pub fn remove(&self) -> Result<(), ServiceError> {
        tracing::info!(service = %self.name, "Removing service");
        self.run("remove", &["confirm".to_string()]).map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if NSSM fails.
    pub fn start(&self) -> Result<(), ServiceError> {
        self.run("start", &[]).map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if NSSM fails.
    pub fn stop(&self) -> Result<(), ServiceError> {
        self.run("stop", &[]).map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if NSSM fails; failures resolve like `start`.
    pub fn restart(&self) -> Result<(), ServiceError> {
        self.run("restart", &[]).map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if NSSM fails.
    pub fn pause(&self) -> Result<(), ServiceError> {
        self.run("pause", &[]).map(drop)
    }

    /// Resumes a paused service (`nssm continue`).
    ///
    /// # Errors
    ///
    /// Returns an error if NSSM fails.
    pub fn resume(&self) -> Result<(), ServiceError> {
        self.run("continue", &[]).map(drop)
    }

    /// Triggers on-demand rotation of redirected output files.
    ///
    /// NSSM treats user-defined control 128 as the rotation cue; it only has
    /// an effect when online rotation is enabled. Services not managed by
    /// NSSM may react to control 128 in their own way.
    ///
    /// # Errors
    ///
    /// Returns an error if NSSM fails.
    pub fn rotate(&self) -> Result<(), ServiceError> {
        self.run("rotate", &[]).map(drop)
    }

    /// Opens the NSSM GUI editor for the service.
    ///
    /// # Errors
    ///
    /// Returns an error if NSSM fails.
    pub fn edit(&self) -> Result<(), ServiceError> {
        self.run("edit", &[]).map(drop)
    }

    /// Queries the service status.
    ///
    /// # Errors
    ///
    /// Returns an error if NSSM fails or prints no known status token.
    pub fn status(&self) -> Result<ServiceStatus, ServiceError> {
        let invocation = self.run("status", &[])?;
        parse_status(&invocation.output).ok_or_else(|| ServiceError::UnknownStatus {
            service: self.name.clone(),
            output: invocation.output.trim().to_string(),
        })
    }

    /// Reads the current value of one option from the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the key has no NSSM parameter or NSSM fails.
    pub fn get(&self, key: &str) -> Result<String, ServiceError> {
        let param = param_name(key).ok_or_else(|| ServiceError::UnknownOption {
            service: self.name.clone(),
            key: key.to_string(),
        })?;
        let invocation = self.run("get", &[param.to_string()])?;
        Ok(invocation.output.trim().to_string())
    }

    /// Merges `configuration` into the stored one, then applies it.
    ///
    /// Only the entries of `configuration` are sent, one `set` call per
    /// entry (one per trigger for exit actions). The merge happens first,
    /// so a failed call still leaves the stored configuration updated.
    ///
    /// # Errors
    ///
    /// Returns the first NSSM failure; later entries are not sent.
    pub fn configure(&mut self, configuration: &ServiceConfiguration) -> Result<(), ServiceError> {
        tracing::info!(
            service = %self.name,
            options = configuration.len(),
            "Configuring service"
        );
        self.configuration.update(configuration);

        for (key, value) in configuration {
            let Some(calls) = set_arguments(key, value) else {
                tracing::warn!(service = %self.name, key = %key, "Skipping option without NSSM parameter");
                continue;
            };
            for args in calls {
                self.run("set", &args)?;
            }
        }
        Ok(())
    }

    /// Validates raw options, then applies them like [`Service::configure`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] before any NSSM call if an option
    /// is malformed, otherwise the first NSSM failure.
    pub fn configure_raw(&mut self, options: &RawMap) -> Result<(), ServiceError> {
        let configuration = ServiceConfiguration::from_raw(options)?;
        self.configure(&configuration)
    }

    /// Runs one command and maps a non-zero return code to an [`NssmError`].
    fn run(&self, command: &str, args: &[String]) -> Result<Invocation, ServiceError> {
        let invocation = self.invoker.invoke(command, &self.name, args)?;
        if invocation.is_success() {
            return Ok(invocation);
        }

        let kind = resolve(command, invocation.return_code);
        if kind == ErrorKind::Nssm {
            tracing::warn!(
                service = %self.name,
                command,
                return_code = invocation.return_code,
                "Unrecognized NSSM failure"
            );
        }

        Err(NssmError::from_failure(
            kind,
            &self.name,
            &invocation.output,
            invocation.return_code,
        )
        .into())
    }
}
