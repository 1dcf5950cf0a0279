//! Message log levels ordered from most to least important.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The log level of a message, doubling as the configured output threshold.
///
/// Ordered from `Error` (always shown) to `Trace` (most verbose), matching
/// the derived `PartialOrd`/`Ord` implementation based on declaration order.
/// A message is shown when its level is at or before the threshold.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors, including promoted developer and deprecation messages.
    Error,
    /// Warnings, including developer and deprecation warnings.
    Warning,
    /// Plain messages with no type keyword.
    Notice,
    /// Progress information, the default threshold.
    #[default]
    Status,
    /// Detail that project users usually do not need.
    Verbose,
    /// Detail intended for project developers.
    Debug,
    /// Fine-grained detail for investigating the configuration itself.
    Trace,
}

impl LogLevel {
    /// All log levels from least to most verbose.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Status,
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Returns `true` if a message at this level is shown under `threshold`.
    pub fn passes(self, threshold: LogLevel) -> bool {
        self <= threshold
    }

    /// Returns the lowercase name of this level.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Status => "status",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`LogLevel`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLogLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    /// Parses a level name case-insensitively (`"status"`, `"STATUS"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLogLevelError(s.to_string()))
    }
}
