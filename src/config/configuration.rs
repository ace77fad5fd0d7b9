//! Validated service configuration.

use std::fmt;
use std::ops::Deref;

use super::container::ConfigMap;
use super::error::ValidationError;
use super::schema;
use super::value::{ConfigValue, RawMap};

/// The validated option set of one service.
///
/// Only constructible through validation, so every value it holds is
/// already coerced. Read access goes through [`ConfigMap`] via `Deref`;
/// mutation is limited to merging another validated configuration in and
/// removing entries.
///
/// # Example
///
/// ```
/// use nssm_wrap::config::{RawMap, ServiceConfiguration};
///
/// let raw = RawMap::from([
///     ("startup".to_string(), "AUTOMATIC".into()),
///     ("console_window".to_string(), false.into()),
/// ]);
/// let config = ServiceConfiguration::from_raw(&raw).unwrap();
/// assert_eq!(config["startup"].to_string(), "SERVICE_AUTO_START");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceConfiguration {
    entries: ConfigMap,
}

impl ServiceConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: ConfigMap::new(),
        }
    }

    /// Validates raw options into a configuration.
    ///
    /// Unrecognized keys are dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every recognized key with a
    /// wrong-shaped value.
    pub fn from_raw(raw: &RawMap) -> Result<Self, ValidationError> {
        schema::validate(raw).map(|entries| Self { entries })
    }

    /// Merges `other` into this configuration (see [`ConfigMap::update`]).
    pub fn update(&mut self, other: &Self) {
        self.entries.update(&other.entries);
    }

    /// Removes `key`, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &ConfigMap {
        &self.entries
    }
}

impl Deref for ServiceConfiguration {
    type Target = ConfigMap;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl fmt::Display for ServiceConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries)
    }
}

impl<'a> IntoIterator for &'a ServiceConfiguration {
    type Item = <&'a ConfigMap as IntoIterator>::Item;
    type IntoIter = <&'a ConfigMap as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
