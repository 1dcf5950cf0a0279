//! The kinds of message shown through the message sink.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an error- or warning-level message is presented.
///
/// Plain keywords map to a fixed type; developer and deprecation messages
/// get a warning or error type depending on policy flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// An error; processing may or may not continue.
    FatalError,
    /// A developer warning.
    AuthorWarning,
    /// A developer warning promoted to an error.
    AuthorError,
    /// A warning.
    Warning,
    /// An informational log message.
    Log,
    /// A deprecation message promoted to an error.
    DeprecationError,
    /// A deprecation warning.
    DeprecationWarning,
}

impl MessageType {
    /// Returns `true` for the types that fail the run when displayed.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            MessageType::FatalError | MessageType::AuthorError | MessageType::DeprecationError
        )
    }

    /// Returns `true` for developer messages.
    pub fn is_dev(self) -> bool {
        matches!(self, MessageType::AuthorWarning | MessageType::AuthorError)
    }

    /// Returns the title used in message headers (e.g. `"Warning (dev)"`).
    pub fn title(self) -> &'static str {
        match self {
            MessageType::FatalError => "Error",
            MessageType::AuthorWarning => "Warning (dev)",
            MessageType::AuthorError => "Error (dev)",
            MessageType::Warning => "Warning",
            MessageType::Log => "Log",
            MessageType::DeprecationError => "Deprecation Error",
            MessageType::DeprecationWarning => "Deprecation Warning",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_error() {
        assert!(MessageType::FatalError.is_error());
        assert!(MessageType::AuthorError.is_error());
        assert!(MessageType::DeprecationError.is_error());
        assert!(!MessageType::Warning.is_error());
        assert!(!MessageType::AuthorWarning.is_error());
        assert!(!MessageType::DeprecationWarning.is_error());
        assert!(!MessageType::Log.is_error());
    }

    #[test]
    fn is_dev() {
        assert!(MessageType::AuthorWarning.is_dev());
        assert!(MessageType::AuthorError.is_dev());
        assert!(!MessageType::Warning.is_dev());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", MessageType::FatalError), "Error");
        assert_eq!(format!("{}", MessageType::AuthorWarning), "Warning (dev)");
        assert_eq!(
            format!("{}", MessageType::DeprecationWarning),
            "Deprecation Warning"
        );
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&MessageType::DeprecationError).unwrap();
        assert_eq!(json, "\"deprecation_error\"");
        let back: MessageType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MessageType::DeprecationError);
    }
}
