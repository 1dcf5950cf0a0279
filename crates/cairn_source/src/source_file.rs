//! A registered source file and its property table.

use crate::source_id::SourceId;
use cairn_common::is_on;
use std::collections::BTreeMap;

/// A source file known to the configuration, with its string-valued properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// The unique identifier for this file within the [`SourceRegistry`](crate::SourceRegistry).
    pub id: SourceId,
    /// The name the file is registered and looked up under.
    pub name: String,
    properties: BTreeMap<String, String>,
}

impl SourceFile {
    /// Creates a source file with no properties.
    pub fn new(id: SourceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Sets (or replaces) a property.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Returns the value of a property, or `None` if it is not set.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Returns a property interpreted as a boolean; an unset property is `false`.
    pub fn property_as_bool(&self, name: &str) -> bool {
        self.property(name).is_some_and(is_on)
    }

    /// Iterates over all properties in name order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> SourceFile {
        SourceFile::new(SourceId::from_raw(0), "main.c")
    }

    #[test]
    fn unset_property() {
        let f = file();
        assert_eq!(f.property("COMPILE_FLAGS"), None);
        assert!(!f.property_as_bool("ABSTRACT"));
    }

    #[test]
    fn string_property() {
        let mut f = file();
        f.set_property("COMPILE_FLAGS", "-O2");
        assert_eq!(f.property("COMPILE_FLAGS"), Some("-O2"));
    }

    #[test]
    fn bool_property() {
        let mut f = file();
        f.set_property("ABSTRACT", "ON");
        f.set_property("WRAP_EXCLUDE", "no");
        assert!(f.property_as_bool("ABSTRACT"));
        assert!(!f.property_as_bool("WRAP_EXCLUDE"));
    }

    #[test]
    fn numeric_property_other_than_one_is_false() {
        let mut f = file();
        f.set_property("ABSTRACT", "2");
        f.set_property("WRAP_EXCLUDE", "1");
        assert!(!f.property_as_bool("ABSTRACT"));
        assert!(f.property_as_bool("WRAP_EXCLUDE"));
    }

    #[test]
    fn properties_in_name_order() {
        let mut f = file();
        f.set_property("B", "2");
        f.set_property("A", "1");
        let names: Vec<_> = f.properties().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
