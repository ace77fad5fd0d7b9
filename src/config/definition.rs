//! Service definition resolved from CLI arguments and the TOML file.
//!
//! CLI arguments take precedence over the config file. Option overrides
//! (`--set KEY=VALUE`) are layered on top of the file's `[options]` table
//! before validation, so the validator sees one merged raw mapping.

use std::fmt;
use std::path::{Path, PathBuf};

use super::cli::{Cli, Command};
use super::configuration::ServiceConfiguration;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;
use super::value::{RawMap, apply_assignment};

/// Everything needed to drive one service command.
#[derive(Debug)]
pub struct ServiceDefinition {
    /// Service name (required)
    pub name: String,

    /// Application executable; only needed by `install`
    pub path: Option<String>,

    /// NSSM executable to invoke
    pub executable: PathBuf,

    /// Validated service options
    pub configuration: ServiceConfiguration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ServiceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service {{ name: {}, path: {}, nssm: {}, options: {} }}",
            self.name,
            self.path.as_deref().unwrap_or("none"),
            self.executable.display(),
            self.configuration.len(),
        )
    }
}

impl ServiceDefinition {
    /// Creates a definition from CLI arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The service name is missing
    /// - An option override is malformed
    /// - The merged options fail validation
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let name = Self::resolve_name(cli, toml)?;
        let path = Self::resolve_path(cli, toml);
        let executable = Self::resolve_executable(cli, toml);
        let configuration = resolve_options(cli, toml)?;

        Ok(Self {
            name,
            path,
            executable,
            configuration,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or the
    /// merged definition is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = load_toml(cli)?;
        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the application path, required to install a service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if no path was given.
    pub fn require_path(&self) -> Result<&str, ConfigError> {
        self.path.as_deref().ok_or_else(|| {
            ConfigError::missing(
                field::SERVICE_PATH,
                "Pass the application path to install or set service.path in config file",
            )
        })
    }

    fn resolve_name(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.name
            .clone()
            .or_else(|| toml.and_then(|t| t.service.name.clone()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::SERVICE_NAME,
                    "Use --name or set service.name in config file",
                )
            })
    }

    fn resolve_path(cli: &Cli, toml: Option<&TomlConfig>) -> Option<String> {
        let from_cli = match &cli.command {
            Command::Install { path, .. } => path.clone(),
            _ => None,
        };

        from_cli.or_else(|| toml.and_then(|t| t.service.path.clone()))
    }

    fn resolve_executable(cli: &Cli, toml: Option<&TomlConfig>) -> PathBuf {
        // CLI (or NSSM_EXE) > TOML > PATH lookup
        cli.nssm
            .clone()
            .or_else(|| toml.and_then(|t| t.nssm.clone()))
            .unwrap_or_else(|| PathBuf::from(defaults::NSSM_EXECUTABLE))
    }
}

/// Loads the TOML file named by `--config`, if any.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_toml(cli: &Cli) -> Result<Option<TomlConfig>, ConfigError> {
    cli.config.as_deref().map(TomlConfig::load).transpose()
}

/// Validates the file's `[options]` with command-line overrides applied.
///
/// # Errors
///
/// Returns an error if an override is malformed or validation fails.
pub fn resolve_options(
    cli: &Cli,
    toml: Option<&TomlConfig>,
) -> Result<ServiceConfiguration, ConfigError> {
    let raw = raw_options(cli, toml)?;
    Ok(ServiceConfiguration::from_raw(&raw)?)
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns raw options with overrides applied, without validating them.
///
/// # Errors
///
/// Returns an error if an override is malformed.
pub fn raw_options(cli: &Cli, toml: Option<&TomlConfig>) -> Result<RawMap, ConfigError> {
    let mut raw = toml.map(|t| t.options.clone()).unwrap_or_default();
    for assignment in cli.command.overrides() {
        apply_assignment(&mut raw, assignment)?;
    }
    Ok(raw)
}
