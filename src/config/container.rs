//! Ordered, nesting-aware key-value container.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::fmt::Write as _;
use std::ops::Index;

use super::defaults;
use super::value::ConfigValue;

/// Mapping from option keys to validated values.
///
/// Keys are kept sorted, so iteration and rendering are deterministic.
/// Nested structured values (user account, environment, exit actions) are
/// themselves `ConfigMap`s stored as [`ConfigValue::Map`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMap {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigValue> {
        self.entries.get_mut(key)
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.remove(key)
    }

    /// Removes `key` and returns its value, or `default` when absent.
    pub fn pop_or(&mut self, key: &str, default: ConfigValue) -> ConfigValue {
        self.entries.remove(key).unwrap_or(default)
    }

    /// Removes and returns the first entry in key order.
    pub fn pop_first(&mut self) -> Option<(String, ConfigValue)> {
        self.entries.pop_first()
    }

    /// Returns the value for `key`, inserting `default` first if absent.
    pub fn get_or_insert(
        &mut self,
        key: impl Into<String>,
        default: ConfigValue,
    ) -> &mut ConfigValue {
        self.entries.entry(key.into()).or_insert(default)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.entries.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.entries.iter()
    }

    /// Layers `other` on top of this map.
    ///
    /// Where both sides hold a nested map under the same key the merge
    /// recurses; in every other case the incoming value replaces the
    /// existing one.
    pub fn update(&mut self, other: &Self) {
        for (key, incoming) in other {
            if let (Some(ConfigValue::Map(existing)), ConfigValue::Map(nested)) =
                (self.entries.get_mut(key), incoming)
            {
                existing.update(nested);
            } else {
                self.entries.insert(key.clone(), incoming.clone());
            }
        }
    }

    /// Renders the map as an indented listing.
    ///
    /// Scalar entries come first, one `key : value` line each with the key
    /// padded to a fixed width. Nested maps follow as a `key...` header and
    /// their own listing indented by four more spaces.
    #[must_use]
    pub fn pretty_print(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, 0);
        out
    }

    fn render(&self, out: &mut String, indent: usize) {
        let pad = " ".repeat(indent);
        let width = defaults::PRETTY_KEY_WIDTH;

        for (key, value) in self.iter().filter(|(_, v)| !v.is_map()) {
            let _ = writeln!(out, "{pad}{key:<width$}: {value}");
        }

        for (key, value) in &self.entries {
            if let ConfigValue::Map(nested) = value {
                let _ = writeln!(out, "{pad}{key}...");
                nested.render(out, indent + defaults::PRETTY_INDENT_STEP);
            }
        }
    }
}

impl fmt::Display for ConfigMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl Index<&str> for ConfigMap {
    type Output = ConfigValue;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Self::Output {
        self.entries
            .get(key)
            .unwrap_or_else(|| panic!("no configuration entry for key '{key}'"))
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, ConfigValue);
    type IntoIter = btree_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> Extend<(K, V)> for ConfigMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.entries.insert(key.into(), value.into());
        }
    }
}
