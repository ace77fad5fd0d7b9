//! Configuration layer for nssm-wrap.
//!
//! This module provides:
//! - Raw option input ([`RawValue`], [`RawMap`]) and validated values ([`ConfigValue`])
//! - The ordered, nesting-aware container ([`ConfigMap`])
//! - The option schema and validator ([`schema`], [`ServiceConfiguration`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - The resolved service definition ([`ServiceDefinition`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--name`, `--nssm` (or `NSSM_EXE`), the install path,
//!    and `--set KEY=VALUE` option overrides
//! 2. **TOML config file** - `[service]`, `nssm`, and `[options]`
//! 3. **Built-in defaults** - NSSM looked up on `PATH`
//!
//! # Unknown options
//!
//! Unrecognized option keys are dropped during validation rather than
//! rejected. Recognized keys with the wrong shape fail validation, and every
//! such key is reported together.

mod cli;
mod configuration;
mod container;
pub mod defaults;
mod definition;
mod error;
pub mod schema;
mod toml;
mod value;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod definition_tests;

pub use cli::{Cli, Command};
pub use configuration::ServiceConfiguration;
pub use container::ConfigMap;
pub use definition::{
    ServiceDefinition, load_toml, raw_options, resolve_options, write_default_config,
};
pub use error::{ConfigError, FieldIssue, ValidationError, field};
pub use toml::{ServiceSection, TomlConfig, default_config_template};
pub use value::{ConfigValue, RawMap, RawValue, apply_assignment};
