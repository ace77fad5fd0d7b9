//! Option schema: which keys are recognized and what shape each accepts.
//!
//! Validation is a filter for unknown keys (they are dropped silently) and a
//! strict check for known ones. All known keys are checked before failing so
//! the resulting [`ValidationError`] reports every problem at once.

use crate::params::{EnumValueError, ExitAction, ParamEnum, PriorityLevel, ServiceType, StartupType};

use super::container::ConfigMap;
use super::error::{FieldIssue, ValidationError};
use super::value::{ConfigValue, RawMap, RawValue};

/// Trigger key every exit-action table must define.
pub const DEFAULT_EXIT_TRIGGER: &str = "Default";

/// Literal accepted by `cpu_affinity` to mean every processor.
pub const AFFINITY_ALL: &str = "All";

/// Shape rule for a recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A string.
    Text,
    /// A string or a list of strings.
    TextOrList,
    /// An integer.
    Integer,
    /// A boolean.
    Flag,
    /// A [`StartupType`] name or value.
    Startup,
    /// A [`PriorityLevel`] name or value.
    Priority,
    /// A [`ServiceType`] name or value.
    Type,
    /// `"All"` or a non-negative integer bitmask.
    Affinity,
    /// A pre-formatted credential string, or a table with `username` and `password`.
    Account,
    /// A string, or a table of variable name to value.
    Environment,
    /// A table of trigger to [`ExitAction`]; `Default` is required.
    ExitActions,
}

/// Every recognized option and its rule.
pub const FIELDS: &[(&str, Rule)] = &[
    // Application
    ("path", Rule::Text),
    ("startup_dir", Rule::Text),
    ("arguments", Rule::TextOrList),
    // Details
    ("display_name", Rule::Text),
    ("description", Rule::Text),
    ("startup", Rule::Startup),
    // Log on
    ("user_account", Rule::Account),
    ("type", Rule::Type),
    // Dependencies
    ("dependencies", Rule::TextOrList),
    // Process
    ("process_priority", Rule::Priority),
    ("console_window", Rule::Flag),
    ("cpu_affinity", Rule::Affinity),
    // Shutdown
    ("terminate_process", Rule::Flag),
    ("stop_console", Rule::Integer),
    ("stop_window", Rule::Integer),
    ("stop_threads", Rule::Integer),
    // Exit actions
    ("restart_throttling", Rule::Integer),
    ("action_on_exit", Rule::ExitActions),
    ("restart_delay", Rule::Integer),
    // I/O
    ("stdout", Rule::Text),
    ("stderr", Rule::Text),
    // File rotation
    ("stdout_creation", Rule::Integer),
    ("stderr_creation", Rule::Integer),
    ("rotate_files", Rule::Flag),
    ("rotate_online", Rule::Flag),
    ("rotation_time", Rule::Integer),
    ("rotation_size", Rule::Integer),
    // Environment
    ("env", Rule::Environment),
];

/// Returns the rule for `key`, or `None` if the option is not recognized.
#[must_use]
pub fn rule_for(key: &str) -> Option<Rule> {
    FIELDS
        .iter()
        .find(|(field, _)| *field == key)
        .map(|(_, rule)| *rule)
}

/// Validates and coerces raw options.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every recognized key whose value
/// has the wrong shape or type.
pub fn validate(raw: &RawMap) -> Result<ConfigMap, ValidationError> {
    let mut validated = ConfigMap::new();
    let mut issues = Vec::new();

    for (key, value) in raw {
        let Some(rule) = rule_for(key) else {
            tracing::debug!(key = %key, "Dropping unrecognized option");
            continue;
        };

        match rule.check(key, value) {
            Ok(coerced) => {
                validated.insert(key.clone(), coerced);
            }
            Err(mut found) => issues.append(&mut found),
        }
    }

    if issues.is_empty() {
        Ok(validated)
    } else {
        Err(ValidationError { issues })
    }
}

impl Rule {
    /// Checks `value` against this rule, returning the coerced value.
    ///
    /// # Errors
    ///
    /// Returns every issue found; structured rules may report several.
    pub fn check(self, key: &str, value: &RawValue) -> Result<ConfigValue, Vec<FieldIssue>> {
        match self {
            Self::Text => text(key, value).map(ConfigValue::Text).map_err(|e| vec![e]),
            Self::TextOrList => text_or_list(key, value),
            Self::Integer => integer(key, value).map_err(|e| vec![e]),
            Self::Flag => flag(key, value).map_err(|e| vec![e]),
            Self::Startup => symbol::<StartupType>(key, value)
                .map(ConfigValue::Startup)
                .map_err(|e| vec![e]),
            Self::Priority => symbol::<PriorityLevel>(key, value)
                .map(ConfigValue::Priority)
                .map_err(|e| vec![e]),
            Self::Type => symbol::<ServiceType>(key, value)
                .map(ConfigValue::Type)
                .map_err(|e| vec![e]),
            Self::Affinity => affinity(key, value).map_err(|e| vec![e]),
            Self::Account => account(key, value),
            Self::Environment => environment(key, value),
            Self::ExitActions => exit_actions(key, value),
        }
    }
}

fn mismatch(key: &str, expected: &str, value: &RawValue) -> FieldIssue {
    FieldIssue::new(key, format!("expected {expected}, got {}", value.describe()))
}

fn required(key: &str) -> FieldIssue {
    FieldIssue::new(key, "required key not provided")
}

fn text(key: &str, value: &RawValue) -> Result<String, FieldIssue> {
    match value {
        RawValue::Text(s) => Ok(s.clone()),
        other => Err(mismatch(key, "a string", other)),
    }
}

fn integer(key: &str, value: &RawValue) -> Result<ConfigValue, FieldIssue> {
    match value {
        RawValue::Integer(n) => Ok(ConfigValue::Integer(*n)),
        other => Err(mismatch(key, "an integer", other)),
    }
}

fn flag(key: &str, value: &RawValue) -> Result<ConfigValue, FieldIssue> {
    match value {
        RawValue::Bool(b) => Ok(ConfigValue::Flag(*b)),
        other => Err(mismatch(key, "a boolean", other)),
    }
}

fn symbol<T: ParamEnum>(key: &str, value: &RawValue) -> Result<T, FieldIssue> {
    let name = text(key, value)?;
    T::coerce(&name).map_err(|e: EnumValueError| FieldIssue::new(key, e.to_string()))
}

fn text_or_list(key: &str, value: &RawValue) -> Result<ConfigValue, Vec<FieldIssue>> {
    match value {
        RawValue::Text(s) => Ok(ConfigValue::Text(s.clone())),
        RawValue::List(items) => {
            let mut strings = Vec::with_capacity(items.len());
            let mut issues = Vec::new();
            for (index, item) in items.iter().enumerate() {
                match text(&format!("{key}[{index}]"), item) {
                    Ok(s) => strings.push(s),
                    Err(issue) => issues.push(issue),
                }
            }
            if issues.is_empty() {
                Ok(ConfigValue::List(strings))
            } else {
                Err(issues)
            }
        }
        other => Err(vec![mismatch(key, "a string or a list of strings", other)]),
    }
}

fn affinity(key: &str, value: &RawValue) -> Result<ConfigValue, FieldIssue> {
    match value {
        RawValue::Text(s) if s == AFFINITY_ALL => Ok(ConfigValue::Text(s.clone())),
        RawValue::Integer(mask) if *mask >= 0 => Ok(ConfigValue::Integer(*mask)),
        RawValue::Integer(mask) => Err(FieldIssue::new(
            key,
            format!("expected a non-negative bitmask, got {mask}"),
        )),
        RawValue::Text(s) => Err(FieldIssue::new(
            key,
            format!("expected \"{AFFINITY_ALL}\" or an integer bitmask, got \"{s}\""),
        )),
        other => Err(mismatch(key, "\"All\" or an integer bitmask", other)),
    }
}

fn account(key: &str, value: &RawValue) -> Result<ConfigValue, Vec<FieldIssue>> {
    let table = match value {
        RawValue::Text(s) => return Ok(ConfigValue::Text(s.clone())),
        RawValue::Table(table) => table,
        other => {
            return Err(vec![mismatch(
                key,
                "a string or a table with username and password",
                other,
            )]);
        }
    };

    let mut account = ConfigMap::new();
    let mut issues = Vec::new();
    for sub in ["username", "password"] {
        let path = format!("{key}.{sub}");
        match table.get(sub).map(|v| text(&path, v)) {
            Some(Ok(s)) => {
                account.insert(sub, ConfigValue::Text(s));
            }
            Some(Err(issue)) => issues.push(issue),
            None => issues.push(required(&path)),
        }
    }

    if issues.is_empty() {
        Ok(ConfigValue::Map(account))
    } else {
        Err(issues)
    }
}

fn environment(key: &str, value: &RawValue) -> Result<ConfigValue, Vec<FieldIssue>> {
    let table = match value {
        RawValue::Text(s) => return Ok(ConfigValue::Text(s.clone())),
        RawValue::Table(table) => table,
        other => {
            return Err(vec![mismatch(
                key,
                "a string or a table of variables",
                other,
            )]);
        }
    };

    let mut variables = ConfigMap::new();
    let mut issues = Vec::new();
    for (name, raw) in table {
        match raw {
            RawValue::Text(s) => {
                variables.insert(name.clone(), ConfigValue::Text(s.clone()));
            }
            RawValue::Integer(n) => {
                variables.insert(name.clone(), ConfigValue::Text(n.to_string()));
            }
            other => issues.push(mismatch(
                &format!("{key}.{name}"),
                "a string or an integer",
                other,
            )),
        }
    }

    if issues.is_empty() {
        Ok(ConfigValue::Map(variables))
    } else {
        Err(issues)
    }
}

fn exit_actions(key: &str, value: &RawValue) -> Result<ConfigValue, Vec<FieldIssue>> {
    let RawValue::Table(table) = value else {
        return Err(vec![mismatch(key, "a table of exit triggers", value)]);
    };

    let mut actions = ConfigMap::new();
    let mut issues = Vec::new();
    if !table.contains_key(DEFAULT_EXIT_TRIGGER) {
        issues.push(required(&format!("{key}.{DEFAULT_EXIT_TRIGGER}")));
    }

    for (trigger, raw) in table {
        match symbol::<ExitAction>(&format!("{key}.{trigger}"), raw) {
            Ok(action) => {
                actions.insert(trigger.clone(), ConfigValue::ExitAction(action));
            }
            Err(issue) => issues.push(issue),
        }
    }

    if issues.is_empty() {
        Ok(ConfigValue::Map(actions))
    } else {
        Err(issues)
    }
}
