//! The table mapping a message's leading keyword to its classification.

use crate::message_type::MessageType;
use cairn_config::LogLevel;

/// Which policy flags, if any, may reclassify a keyword's messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PolicyClass {
    /// Fixed classification.
    Plain,
    /// Governed by `SUPPRESS_DEVELOPER_ERRORS` / `SUPPRESS_DEVELOPER_WARNINGS`.
    AuthorWarning,
    /// Governed by `ERROR_DEPRECATED` / `WARN_DEPRECATED`.
    Deprecation,
}

/// The resolved presentation of a message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Classification {
    /// How error- and warning-level messages are displayed.
    pub display: MessageType,
    /// The level compared against the threshold and used for routing.
    pub level: LogLevel,
    /// Whether emitting the message raises the fatal flag.
    pub fatal: bool,
}

impl Classification {
    const fn new(display: MessageType, level: LogLevel, fatal: bool) -> Self {
        Self {
            display,
            level,
            fatal,
        }
    }
}

/// One entry of the keyword table.
///
/// For policy-governed classes, `classification` is the warning form; policy
/// resolution may escalate it to an error or suppress it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeywordRule {
    /// The keyword, matched exactly and case-sensitively.
    pub keyword: &'static str,
    /// The policy class governing this keyword.
    pub class: PolicyClass,
    /// The classification before policy resolution.
    pub classification: Classification,
}

const fn rule(
    keyword: &'static str,
    class: PolicyClass,
    display: MessageType,
    level: LogLevel,
    fatal: bool,
) -> KeywordRule {
    KeywordRule {
        keyword,
        class,
        classification: Classification::new(display, level, fatal),
    }
}

/// Every recognized message keyword.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    rule("SEND_ERROR", PolicyClass::Plain, MessageType::FatalError, LogLevel::Error, false),
    rule("FATAL_ERROR", PolicyClass::Plain, MessageType::FatalError, LogLevel::Error, true),
    rule("WARNING", PolicyClass::Plain, MessageType::Warning, LogLevel::Warning, false),
    rule(
        "AUTHOR_WARNING",
        PolicyClass::AuthorWarning,
        MessageType::AuthorWarning,
        LogLevel::Warning,
        false,
    ),
    rule("STATUS", PolicyClass::Plain, MessageType::Log, LogLevel::Status, false),
    rule("VERBOSE", PolicyClass::Plain, MessageType::Log, LogLevel::Verbose, false),
    rule("DEBUG", PolicyClass::Plain, MessageType::Log, LogLevel::Debug, false),
    rule("TRACE", PolicyClass::Plain, MessageType::Log, LogLevel::Trace, false),
    rule(
        "DEPRECATION",
        PolicyClass::Deprecation,
        MessageType::DeprecationWarning,
        LogLevel::Warning,
        false,
    ),
    rule("NOTICE", PolicyClass::Plain, MessageType::Log, LogLevel::Notice, false),
];

/// Classification of a message whose first argument is not a keyword.
pub const UNTYPED: Classification =
    Classification::new(MessageType::Log, LogLevel::Notice, false);

/// Looks up the rule for a leading argument, if it is a keyword.
pub fn lookup_keyword(word: &str) -> Option<&'static KeywordRule> {
    KEYWORD_RULES.iter().find(|rule| rule.keyword == word)
}
