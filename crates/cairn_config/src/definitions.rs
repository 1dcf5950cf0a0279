//! The variable store: named string definitions with boolean interpretation.

use cairn_common::{expand_list, is_notfound, is_on};
use std::collections::BTreeMap;

/// Definition holding the message indentation pieces as a `;`-list.
pub const MESSAGE_INDENT: &str = "MESSAGE_INDENT";
/// Policy flag: when set to a false value, developer warnings become errors.
pub const SUPPRESS_DEVELOPER_ERRORS: &str = "SUPPRESS_DEVELOPER_ERRORS";
/// Policy flag: when on, developer warnings are not shown.
pub const SUPPRESS_DEVELOPER_WARNINGS: &str = "SUPPRESS_DEVELOPER_WARNINGS";
/// Policy flag: when on, deprecation messages become errors.
pub const ERROR_DEPRECATED: &str = "ERROR_DEPRECATED";
/// Policy flag: when set to a false value, deprecation warnings are not shown.
pub const WARN_DEPRECATED: &str = "WARN_DEPRECATED";

/// A flat store of named string values.
///
/// Booleans are stored as `ON`/`OFF` and lists as `;`-joined strings; the
/// query methods interpret values the same way on the way out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Definitions {
    vars: BTreeMap<String, String>,
}

impl Definitions {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) `name` with a string value.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Defines (or redefines) `name` as `ON` or `OFF`.
    pub fn define_bool(&mut self, name: impl Into<String>, value: bool) {
        self.define(name, if value { "ON" } else { "OFF" });
    }

    /// Removes the definition of `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    /// Returns the value of `name`, or `None` if it is not defined.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns the value of `name`, or the empty string if it is not defined.
    pub fn get_safe(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Returns `true` if `name` is defined at all, even as an empty string.
    pub fn is_defined(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns `true` if `name` is defined, non-empty, and not a NOTFOUND value.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|value| !value.is_empty() && !is_notfound(value))
    }

    /// Returns `true` if `name` is defined with an affirmative value.
    pub fn is_on(&self, name: &str) -> bool {
        self.get(name).is_some_and(is_on)
    }

    /// Expands the `;`-list stored in `name` (undefined expands to nothing).
    pub fn get_list(&self, name: &str) -> Vec<String> {
        expand_list(self.get_safe(name))
    }

    /// Iterates over all definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if nothing is defined.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
