//! The closed set of source properties readable by `get_source_file_property`.

use std::fmt;

/// How a [`SourceProperty`] is read and published.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PropertyKind {
    /// Read as a boolean (unset is `false`) and published as `ON`/`OFF`.
    Bool,
    /// Read as a string (unset is empty) and published verbatim.
    String,
}

/// A source property that can be queried.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SourceProperty {
    /// The source declares an abstract class.
    Abstract,
    /// The source is excluded from wrapper generation.
    WrapExclude,
    /// Extra flags passed when compiling the source.
    CompileFlags,
}

impl SourceProperty {
    /// Every queryable property.
    pub const ALL: [SourceProperty; 3] = [
        SourceProperty::Abstract,
        SourceProperty::WrapExclude,
        SourceProperty::CompileFlags,
    ];

    /// Returns the property for an exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prop| prop.name() == name)
    }

    /// Returns the property's name as stored on the source file.
    pub fn name(self) -> &'static str {
        match self {
            SourceProperty::Abstract => "ABSTRACT",
            SourceProperty::WrapExclude => "WRAP_EXCLUDE",
            SourceProperty::CompileFlags => "COMPILE_FLAGS",
        }
    }

    /// Returns how the property is read.
    pub fn kind(self) -> PropertyKind {
        match self {
            SourceProperty::Abstract | SourceProperty::WrapExclude => PropertyKind::Bool,
            SourceProperty::CompileFlags => PropertyKind::String,
        }
    }
}

impl fmt::Display for SourceProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for prop in SourceProperty::ALL {
            assert_eq!(SourceProperty::from_name(prop.name()), Some(prop));
        }
    }

    #[test]
    fn unknown_and_case_sensitive() {
        assert_eq!(SourceProperty::from_name("LANGUAGE"), None);
        assert_eq!(SourceProperty::from_name("abstract"), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(SourceProperty::Abstract.kind(), PropertyKind::Bool);
        assert_eq!(SourceProperty::WrapExclude.kind(), PropertyKind::Bool);
        assert_eq!(SourceProperty::CompileFlags.kind(), PropertyKind::String);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", SourceProperty::WrapExclude), "WRAP_EXCLUDE");
    }
}
