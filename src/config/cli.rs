//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// nssm-wrap: typed service configuration for NSSM
///
/// Installs, controls, and configures Windows services through the
/// Non-Sucking Service Manager, validating every option before NSSM runs.
#[derive(Debug, Parser)]
#[command(name = "nssm-wrap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Service name (overrides `service.name` from the config file)
    #[arg(long, short, global = true)]
    pub name: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the NSSM executable
    #[arg(long, env = "NSSM_EXE", global = true)]
    pub nssm: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for nssm-wrap
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Validate the configured options and print them
    Show {
        /// Option override, dotted keys for nested tables (can be specified multiple times)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },

    /// Install the service, then apply its options
    Install {
        /// Application executable (overrides `service.path`)
        path: Option<String>,

        /// Option override, dotted keys for nested tables (can be specified multiple times)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },

    /// Remove the service
    #[command(visible_alias = "uninstall")]
    Remove,

    /// Start the service
    Start,

    /// Stop the service
    Stop,

    /// Restart the service
    Restart,

    /// Pause the service
    Pause,

    /// Resume a paused service
    Resume,

    /// Rotate output files of a service with online rotation enabled
    Rotate,

    /// Print the service status
    Status,

    /// Open the NSSM service editor
    Edit,

    /// Print the current value of one option
    Get {
        /// Option key (e.g. `display_name`)
        key: String,
    },

    /// Apply the configured options to an installed service
    Configure {
        /// Option override, dotted keys for nested tables (can be specified multiple times)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
}

impl Command {
    /// Option overrides given on the command line, if the command takes any.
    #[must_use]
    pub fn overrides(&self) -> &[String] {
        match self {
            Self::Show { overrides }
            | Self::Install { overrides, .. }
            | Self::Configure { overrides } => overrides,
            _ => &[],
        }
    }

    /// Returns true if this command talks to a named service.
    #[must_use]
    pub const fn targets_service(&self) -> bool {
        !matches!(self, Self::Init { .. } | Self::Show { .. })
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
