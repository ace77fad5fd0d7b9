//! Raw option input and validated option values.
//!
//! [`RawValue`] is whatever the user handed in (a TOML table, `KEY=VALUE`
//! pairs from the command line, or values built in code). [`ConfigValue`] is
//! what survives validation: every enumeration already resolved to its variant.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::params::{ExitAction, PriorityLevel, ServiceType, StartupType};

use super::ConfigError;
use super::container::ConfigMap;

/// Raw option mapping, keyed by option name.
pub type RawMap = BTreeMap<String, RawValue>;

/// A single unvalidated option value.
///
/// Deserializes from any TOML value except datetimes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// `true` / `false`
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Floating point number (never accepted by any option, kept for error reporting)
    Float(f64),
    /// String
    Text(String),
    /// Array of values
    List(Vec<RawValue>),
    /// Nested table
    Table(RawMap),
}

impl RawValue {
    /// Short description of the value's shape, for validation messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Integer(_) => "an integer",
            Self::Float(_) => "a float",
            Self::Text(_) => "a string",
            Self::List(_) => "a list",
            Self::Table(_) => "a table",
        }
    }

    /// Interprets a command-line scalar.
    ///
    /// `true`/`false` become booleans, anything that parses as `i64` becomes
    /// an integer, and everything else stays a string.
    #[must_use]
    pub fn parse_scalar(s: &str) -> Self {
        match s {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => s
                .parse::<i64>()
                .map_or_else(|_| Self::Text(s.to_string()), Self::Integer),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Self>> for RawValue {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<RawMap> for RawValue {
    fn from(table: RawMap) -> Self {
        Self::Table(table)
    }
}

/// Applies a `KEY=VALUE` assignment to a raw mapping.
///
/// Dotted keys address nested tables, so `action_on_exit.Default=Restart`
/// produces `{action_on_exit: {Default: "Restart"}}`. A later assignment to
/// the same key overwrites the earlier one.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidAssignment`] when the `=` is missing, a key
/// segment is empty, or a dotted path runs through a non-table value.
pub fn apply_assignment(raw: &mut RawMap, assignment: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidAssignment {
        value: assignment.to_string(),
    };

    let (path, value) = assignment.split_once('=').ok_or_else(invalid)?;
    let segments: Vec<&str> = path.trim().split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(invalid());
    }

    let (last, parents) = segments.split_last().ok_or_else(invalid)?;
    let mut table = raw;
    for segment in parents {
        let entry = table
            .entry((*segment).to_string())
            .or_insert_with(|| RawValue::Table(RawMap::new()));
        table = match entry {
            RawValue::Table(nested) => nested,
            _ => return Err(invalid()),
        };
    }

    table.insert((*last).to_string(), RawValue::parse_scalar(value.trim()));
    Ok(())
}

/// A validated, fully coerced option value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Free-form string (paths, names, pre-formatted credentials, `All` affinity)
    Text(String),
    /// Integer (timeouts, thresholds, dispositions, affinity bitmask)
    Integer(i64),
    /// Boolean switch
    Flag(bool),
    /// Several strings (arguments, dependencies)
    List(Vec<String>),
    Startup(StartupType),
    Priority(PriorityLevel),
    Type(ServiceType),
    ExitAction(ExitAction),
    /// Structured value (user account, environment, exit actions)
    Map(ConfigMap),
}

impl ConfigValue {
    /// Returns the nested map, if this is a structured value.
    #[must_use]
    pub const fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true if this value is a nested map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
            Self::Startup(v) => write!(f, "{v}"),
            Self::Priority(v) => write!(f, "{v}"),
            Self::Type(v) => write!(f, "{v}"),
            Self::ExitAction(v) => write!(f, "{v}"),
            Self::Map(map) => write!(f, "{map}"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        Self::Map(map)
    }
}
