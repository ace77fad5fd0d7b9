//! Error types for configuration loading and validation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One option that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Option key; nested fields use `parent.child`, list items `key[index]`
    pub key: String,
    /// What was expected and what was found
    pub message: String,
}

impl FieldIssue {
    /// Creates an issue for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Aggregated validation failure.
///
/// Every recognized option is checked before this is returned, so it lists
/// all offending keys rather than only the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    /// Every problem found, in key order
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Returns true if any issue concerns `key` or one of its nested fields.
    #[must_use]
    pub fn mentions(&self, key: &str) -> bool {
        self.issues.iter().any(|issue| {
            issue.key == key
                || issue
                    .key
                    .strip_prefix(key)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.issues.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        write!(f, "Invalid service configuration ({count} {noun}):")?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Malformed `KEY=VALUE` option assignment.
    #[error("Invalid option assignment '{value}': expected 'KEY=VALUE' or 'PARENT.KEY=VALUE'")]
    InvalidAssignment {
        /// The rejected assignment
        value: String,
    },

    /// Options were read but failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The service name.
    pub const SERVICE_NAME: &str = "service.name";
    /// The application path.
    pub const SERVICE_PATH: &str = "service.path";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
