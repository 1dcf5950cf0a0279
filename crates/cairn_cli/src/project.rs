//! Locating and loading the project configuration.

use std::path::{Path, PathBuf};

use cairn_config::{ProjectConfig, CONFIG_FILE_NAME};

/// A loaded configuration together with the file it came from.
pub struct Project {
    /// The configuration file, or `None` when running on defaults.
    pub path: Option<PathBuf>,
    /// The parsed configuration.
    pub config: ProjectConfig,
}

impl Project {
    /// The name commands from this project are attributed to in backtraces.
    pub fn origin(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or(Path::new(COMMAND_LINE_ORIGIN))
    }
}

/// Origin reported for commands given on the command line without a config file.
pub const COMMAND_LINE_ORIGIN: &str = "<command-line>";

/// Walks up from `start` looking for the nearest `cairn.toml`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolves the configuration to use.
///
/// An explicit `--config` path must exist. Without one, the nearest
/// `cairn.toml` above `cwd` is used, and if there is none the empty default
/// configuration applies.
pub fn load_project(
    explicit: Option<&Path>,
    cwd: &Path,
) -> Result<Project, Box<dyn std::error::Error>> {
    let path = match explicit {
        Some(path) if path.is_dir() => Some(path.join(CONFIG_FILE_NAME)),
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(cwd),
    };

    match path {
        Some(path) => {
            let config = cairn_config::load_config_from_path(&path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            Ok(Project {
                path: Some(path),
                config,
            })
        }
        None => {
            tracing::debug!(cwd = %cwd.display(), "no {CONFIG_FILE_NAME} found, using defaults");
            Ok(Project {
                path: None,
                config: ProjectConfig::default(),
            })
        }
    }
}
