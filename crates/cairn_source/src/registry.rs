//! Registry of all source files known to the configuration.

use crate::source_file::SourceFile;
use crate::source_id::SourceId;
use cairn_config::PropertyValue;
use std::collections::{BTreeMap, HashMap};

/// The source registry, owning every [`SourceFile`] and resolving names to
/// [`SourceId`] handles.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    files: Vec<SourceFile>,
    by_name: HashMap<String, SourceId>,
}

impl SourceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from the `[sources]` table of a configuration.
    pub fn from_config(sources: &BTreeMap<String, BTreeMap<String, PropertyValue>>) -> Self {
        let mut registry = Self::new();
        for (name, properties) in sources {
            registry.add_source(
                name,
                properties
                    .iter()
                    .map(|(prop, value)| (prop.clone(), value.to_value())),
            );
        }
        registry
    }

    /// Registers a source file with the given properties and returns its id.
    ///
    /// Registering a name again keeps its id and replaces its properties.
    pub fn add_source<I>(&mut self, name: &str, properties: I) -> SourceId
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let id = match self.by_name.get(name) {
            Some(&id) => {
                self.files[id.as_raw() as usize] = SourceFile::new(id, name);
                id
            }
            None => {
                let id = SourceId::from_raw(self.files.len() as u32);
                self.files.push(SourceFile::new(id, name));
                self.by_name.insert(name.to_string(), id);
                id
            }
        };
        let file = &mut self.files[id.as_raw() as usize];
        for (prop, value) in properties {
            file.set_property(prop, value);
        }
        id
    }

    /// Looks up a source file by name.
    pub fn find_source(&self, name: &str) -> Option<SourceId> {
        self.by_name.get(name).copied()
    }

    /// Returns the [`SourceFile`] for the given [`SourceId`].
    ///
    /// # Panics
    ///
    /// Panics if the `SourceId` was not issued by this registry.
    pub fn get(&self, id: SourceId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Returns a property of a source file as a boolean; unset is `false`.
    pub fn property_as_bool(&self, id: SourceId, name: &str) -> bool {
        self.get(id).property_as_bool(name)
    }

    /// Returns a property of a source file, or `None` if it is not set.
    pub fn property(&self, id: SourceId, name: &str) -> Option<&str> {
        self.get(id).property(name)
    }

    /// Returns the number of registered sources.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no sources are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
