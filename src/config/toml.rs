//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. The
//! `[options]` table is kept raw; the schema decides what is recognized.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;
use super::value::RawMap;

/// Root configuration structure from TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Path to the NSSM executable
    pub nssm: Option<PathBuf>,

    /// Service identity
    #[serde(default)]
    pub service: ServiceSection,

    /// Service options, validated later
    #[serde(default)]
    pub options: RawMap,
}

/// Service identity section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    /// Service name as registered with the service manager
    pub name: Option<String>,

    /// Application executable the service runs
    pub path: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# nssm-wrap service definition

# Path to nssm.exe (default: NSSM_EXE environment variable, then nssm.exe on PATH)
# nssm = 'C:\tools\nssm\win64\nssm.exe'

[service]
# Service name (required, can be overridden on the command line)
# name = "my-service"

# Application to run (required for install)
# path = 'C:\apps\my-service\my-service.exe'

[options]
# Unknown keys are ignored.

# Application
# startup_dir = 'C:\apps\my-service'
# arguments = ["--port", "8080"]

# Details
# display_name = "My Service"
# description = "Runs my service"
# AUTOMATIC, DELAYED, MANUAL, DISABLED (or SERVICE_AUTO_START, ...)
# startup = "AUTOMATIC"

# Log on: either 'DOMAIN\user password' or a table
# user_account = { username = '.\svc-user', password = "secret" }
# STANDALONE or DESKTOP
# type = "STANDALONE"

# dependencies = ["Tcpip", "Dnscache"]

# Process
# REALTIME, HIGH, ABOVE_NORMAL, NORMAL, BELOW_NORMAL, IDLE
# process_priority = "NORMAL"
# console_window = true
# "All" or a bitmask
# cpu_affinity = "All"

# Shutdown (timeouts in milliseconds)
# terminate_process = false
# stop_console = 1500
# stop_window = 1500
# stop_threads = 1500

# Exit actions: RESTART, IGNORE, EXIT, SUICIDE per exit code, "Default" required
# restart_throttling = 1500
# restart_delay = 0
# action_on_exit = { Default = "Restart", 0 = "Exit" }

# I/O
# stdout = 'C:\apps\my-service\logs\stdout.log'
# stderr = 'C:\apps\my-service\logs\stderr.log'

# File rotation
# stdout_creation = 4
# stderr_creation = 4
# rotate_files = true
# rotate_online = true
# rotation_time = 86400
# rotation_size = 10485760

# Environment: a single 'KEY=value' string or a table
# [options.env]
# RUST_LOG = "info"
"#
    .to_string()
}
