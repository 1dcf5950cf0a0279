//! Configuration types deserialized from `cairn.toml`.

use cairn_common::{cat, escape_list_element, join};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// The top-level configuration parsed from `cairn.toml`.
///
/// Every table is optional; an empty file is a valid configuration with the
/// default `status` threshold and no definitions.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    /// Message output settings (threshold and indentation).
    #[serde(default)]
    pub message: MessageConfig,
    /// Policy flags controlling developer and deprecation messages.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Initial variable definitions.
    #[serde(default)]
    pub variables: BTreeMap<String, VariableValue>,
    /// Source files and their properties, keyed by source name.
    #[serde(default)]
    pub sources: BTreeMap<String, BTreeMap<String, PropertyValue>>,
    /// Commands executed in order by `cairn run`.
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

/// Message output settings.
#[derive(Debug, Default, Deserialize)]
pub struct MessageConfig {
    /// The log level threshold by name (e.g. `"status"`, `"verbose"`).
    pub log_level: Option<String>,
    /// Indentation pieces prepended to every important message line.
    ///
    /// Accepts either a single string or a list of strings.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub indent: Vec<String>,
}

/// Policy flags. An absent flag is "unset", which differs from `false`.
#[derive(Debug, Default, Deserialize)]
pub struct PolicyConfig {
    /// `false` promotes developer warnings to errors; `true` keeps them warnings.
    pub suppress_developer_errors: Option<bool>,
    /// `true` hides developer warnings.
    pub suppress_developer_warnings: Option<bool>,
    /// `true` promotes deprecation messages to errors.
    pub error_deprecated: Option<bool>,
    /// `false` hides deprecation warnings.
    pub warn_deprecated: Option<bool>,
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows TOML config to accept both `indent = "  "` (string) and
/// `indent = ["  ", ">> "]` (array of strings).
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// The value of a variable in the `[variables]` table.
///
/// Uses serde's untagged enum to accept any TOML scalar or a list of strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// A boolean, stored as `ON` or `OFF`.
    Bool(bool),
    /// An integer, stored in decimal form.
    Integer(i64),
    /// A floating-point number, stored in its shortest decimal form.
    Float(f64),
    /// A plain string, stored verbatim.
    String(String),
    /// A list of strings, stored `;`-joined with embedded `;` escaped.
    List(Vec<String>),
}

impl VariableValue {
    /// Returns the flat string this value is stored as.
    pub fn to_definition(&self) -> String {
        match self {
            VariableValue::Bool(true) => "ON".to_string(),
            VariableValue::Bool(false) => "OFF".to_string(),
            VariableValue::Integer(n) => cat!(*n),
            VariableValue::Float(x) => cat!(*x),
            VariableValue::String(s) => s.clone(),
            VariableValue::List(items) => {
                join(items.iter().map(|item| escape_list_element(item)), ";")
            }
        }
    }
}

/// The value of a source file property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A boolean property, stored as `ON` or `OFF`.
    Bool(bool),
    /// A string property, stored verbatim.
    String(String),
}

impl PropertyValue {
    /// Returns the flat string this property is stored as.
    pub fn to_value(&self) -> String {
        match self {
            PropertyValue::Bool(true) => "ON".to_string(),
            PropertyValue::Bool(false) => "OFF".to_string(),
            PropertyValue::String(s) => s.clone(),
        }
    }
}

/// One command invocation in the `[[commands]]` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandSpec {
    /// The command name (`message` or `get_source_file_property`).
    pub name: String,
    /// The command's arguments.
    #[serde(default)]
    pub args: Vec<String>,
}
