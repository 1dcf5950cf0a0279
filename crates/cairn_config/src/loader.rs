//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::log_level::LogLevel;
use crate::types::ProjectConfig;
use std::path::Path;

/// The configuration file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "cairn.toml";

/// Loads and validates a `cairn.toml` configuration from a project directory.
///
/// Reads `<project_dir>/cairn.toml`, parses it, and validates its values.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_from_path(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration from an explicit file path.
pub fn load_config_from_path(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    load_config_from_str(&content)
}

/// Parses and validates a `cairn.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are well-formed.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if let Some(level) = &config.message.log_level {
        level
            .parse::<LogLevel>()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    }
    for (index, command) in config.commands.iter().enumerate() {
        if command.name.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "commands[{index}] has an empty name"
            )));
        }
    }
    if config.sources.keys().any(String::is_empty) {
        return Err(ConfigError::ValidationError(
            "source names must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert!(config.message.log_level.is_none());
        assert!(config.message.indent.is_empty());
        assert!(config.variables.is_empty());
        assert!(config.sources.is_empty());
        assert!(config.commands.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[message]
log_level = "verbose"
indent = ["  ", ">> "]

[policy]
suppress_developer_errors = false
suppress_developer_warnings = false
error_deprecated = false
warn_deprecated = true

[variables]
PROJECT_NAME = "demo"

[sources."foo.c"]
WRAP_EXCLUDE = true

[[commands]]
name = "get_source_file_property"
args = ["OUT", "foo.c", "WRAP_EXCLUDE"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.message.log_level.as_deref(), Some("verbose"));
        assert_eq!(config.message.indent.len(), 2);
        assert_eq!(config.policy.suppress_developer_errors, Some(false));
        assert!(config.variables.contains_key("PROJECT_NAME"));
        assert!(config.sources.contains_key("foo.c"));
        assert_eq!(config.commands[0].name, "get_source_file_property");
    }

    #[test]
    fn unknown_log_level_errors() {
        let err = load_config_from_str("[message]\nlog_level = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn empty_command_name_errors() {
        let err = load_config_from_str("[[commands]]\nname = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_project_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[message]\nlog_level = \"debug\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.message.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
