//! The configuration store: threshold plus definitions, built from a config file.

use crate::definitions::{
    Definitions, ERROR_DEPRECATED, MESSAGE_INDENT, SUPPRESS_DEVELOPER_ERRORS,
    SUPPRESS_DEVELOPER_WARNINGS, WARN_DEPRECATED,
};
use crate::error::ConfigError;
use crate::log_level::LogLevel;
use crate::types::ProjectConfig;
use cairn_common::{escape_list_element, join};

/// The process-wide configuration read by commands.
///
/// Commands treat the store as a read-only snapshot, except for commands
/// whose job is to write variables into [`definitions`](Self::definitions).
#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    /// The current message threshold.
    pub log_level: LogLevel,
    /// Policy flags, indentation, and user variables.
    pub definitions: Definitions,
}

impl ConfigStore {
    /// Creates a store with the given threshold and no definitions.
    pub fn new(log_level: LogLevel) -> Self {
        Self {
            log_level,
            definitions: Definitions::new(),
        }
    }
}

/// Flattens a parsed configuration into a [`ConfigStore`].
///
/// Variables are defined first; the `[policy]` and `[message]` tables are
/// applied on top, so they win over a same-named entry in `[variables]`.
pub fn build_store(config: &ProjectConfig) -> Result<ConfigStore, ConfigError> {
    let log_level = match &config.message.log_level {
        Some(name) => name
            .parse::<LogLevel>()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?,
        None => LogLevel::default(),
    };

    let mut store = ConfigStore::new(log_level);
    let defs = &mut store.definitions;

    for (name, value) in &config.variables {
        defs.define(name.as_str(), value.to_definition());
    }

    let policy = &config.policy;
    for (name, flag) in [
        (SUPPRESS_DEVELOPER_ERRORS, policy.suppress_developer_errors),
        (SUPPRESS_DEVELOPER_WARNINGS, policy.suppress_developer_warnings),
        (ERROR_DEPRECATED, policy.error_deprecated),
        (WARN_DEPRECATED, policy.warn_deprecated),
    ] {
        if let Some(value) = flag {
            defs.define_bool(name, value);
        }
    }

    if !config.message.indent.is_empty() {
        let pieces = config.message.indent.iter().map(|p| escape_list_element(p));
        defs.define(MESSAGE_INDENT, join(pieces, ";"));
    }

    tracing::debug!(
        log_level = %store.log_level,
        definitions = store.definitions.len(),
        "built configuration store"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn empty_config_defaults() {
        let store = build_store(&ProjectConfig::default()).unwrap();
        assert_eq!(store.log_level, LogLevel::Status);
        assert!(store.definitions.is_empty());
    }

    #[test]
    fn log_level_from_config() {
        let config = load_config_from_str("[message]\nlog_level = \"TRACE\"\n").unwrap();
        let store = build_store(&config).unwrap();
        assert_eq!(store.log_level, LogLevel::Trace);
    }

    #[test]
    fn policy_flags_become_definitions() {
        let toml = r#"
[policy]
suppress_developer_errors = false
warn_deprecated = true
"#;
        let config = load_config_from_str(toml).unwrap();
        let store = build_store(&config).unwrap();
        let defs = &store.definitions;
        assert!(defs.is_set(SUPPRESS_DEVELOPER_ERRORS));
        assert!(!defs.is_on(SUPPRESS_DEVELOPER_ERRORS));
        assert!(defs.is_on(WARN_DEPRECATED));
        assert!(!defs.is_defined(SUPPRESS_DEVELOPER_WARNINGS));
        assert!(!defs.is_defined(ERROR_DEPRECATED));
    }

    #[test]
    fn indent_becomes_list() {
        let config = load_config_from_str("[message]\nindent = [\"  \", \">> \"]\n").unwrap();
        let store = build_store(&config).unwrap();
        assert_eq!(store.definitions.get(MESSAGE_INDENT), Some("  ;>> "));
        assert_eq!(
            store.definitions.get_list(MESSAGE_INDENT),
            vec!["  ", ">> "]
        );
    }

    #[test]
    fn policy_table_wins_over_variables() {
        let toml = r#"
[variables]
ERROR_DEPRECATED = "ON"

[policy]
error_deprecated = false
"#;
        let config = load_config_from_str(toml).unwrap();
        let store = build_store(&config).unwrap();
        assert_eq!(store.definitions.get(ERROR_DEPRECATED), Some("OFF"));
    }

    #[test]
    fn variables_are_defined() {
        let config = load_config_from_str("[variables]\nNAME = \"demo\"\n").unwrap();
        let store = build_store(&config).unwrap();
        assert_eq!(store.definitions.get("NAME"), Some("demo"));
    }
}
