//! Policy-flag resolution for developer and deprecation messages.

use crate::keyword::{Classification, KeywordRule, PolicyClass};
use crate::message_type::MessageType;
use cairn_config::definitions::{
    ERROR_DEPRECATED, SUPPRESS_DEVELOPER_ERRORS, SUPPRESS_DEVELOPER_WARNINGS, WARN_DEPRECATED,
};
use cairn_config::{Definitions, LogLevel};

/// What policy flags do to a message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PolicyOutcome {
    /// Promote to a fatal error.
    Escalate,
    /// Keep the keyword's own classification.
    Keep,
    /// Drop the message entirely.
    Suppress,
}

/// Decides how the current policy flags treat a message of `class`.
///
/// Developer warnings escalate when `SUPPRESS_DEVELOPER_ERRORS` is set to a
/// false value, and are dropped when `SUPPRESS_DEVELOPER_WARNINGS` is on.
/// Deprecation messages escalate when `ERROR_DEPRECATED` is on, and are
/// dropped when `WARN_DEPRECATED` is set to a false value.
pub fn resolve_policy(class: PolicyClass, defs: &Definitions) -> PolicyOutcome {
    match class {
        PolicyClass::Plain => PolicyOutcome::Keep,
        PolicyClass::AuthorWarning => {
            if defs.is_set(SUPPRESS_DEVELOPER_ERRORS) && !defs.is_on(SUPPRESS_DEVELOPER_ERRORS) {
                PolicyOutcome::Escalate
            } else if !defs.is_on(SUPPRESS_DEVELOPER_WARNINGS) {
                PolicyOutcome::Keep
            } else {
                PolicyOutcome::Suppress
            }
        }
        PolicyClass::Deprecation => {
            if defs.is_on(ERROR_DEPRECATED) {
                PolicyOutcome::Escalate
            } else if !defs.is_set(WARN_DEPRECATED) || defs.is_on(WARN_DEPRECATED) {
                PolicyOutcome::Keep
            } else {
                PolicyOutcome::Suppress
            }
        }
    }
}

/// Applies policy to a keyword rule; `None` means the message is suppressed.
pub fn apply_policy(rule: &KeywordRule, defs: &Definitions) -> Option<Classification> {
    let outcome = resolve_policy(rule.class, defs);
    tracing::trace!(keyword = rule.keyword, ?outcome, "resolved message policy");
    match outcome {
        PolicyOutcome::Keep => Some(rule.classification),
        PolicyOutcome::Suppress => None,
        PolicyOutcome::Escalate => Some(Classification {
            display: escalated_type(rule.class),
            level: LogLevel::Error,
            fatal: true,
        }),
    }
}

fn escalated_type(class: PolicyClass) -> MessageType {
    match class {
        PolicyClass::AuthorWarning => MessageType::AuthorError,
        PolicyClass::Deprecation => MessageType::DeprecationError,
        PolicyClass::Plain => MessageType::FatalError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::lookup_keyword;

    fn defs(flags: &[(&str, &str)]) -> Definitions {
        let mut defs = Definitions::new();
        for (name, value) in flags {
            defs.define(*name, *value);
        }
        defs
    }

    fn author(flags: &[(&str, &str)]) -> PolicyOutcome {
        resolve_policy(PolicyClass::AuthorWarning, &defs(flags))
    }

    fn deprecation(flags: &[(&str, &str)]) -> PolicyOutcome {
        resolve_policy(PolicyClass::Deprecation, &defs(flags))
    }

    #[test]
    fn plain_is_always_kept() {
        let all_on = defs(&[
            (SUPPRESS_DEVELOPER_WARNINGS, "ON"),
            (ERROR_DEPRECATED, "ON"),
        ]);
        assert_eq!(resolve_policy(PolicyClass::Plain, &all_on), PolicyOutcome::Keep);
    }

    #[test]
    fn author_warning_defaults_to_warning() {
        assert_eq!(author(&[]), PolicyOutcome::Keep);
    }

    #[test]
    fn author_warning_escalates_when_errors_not_suppressed() {
        assert_eq!(
            author(&[(SUPPRESS_DEVELOPER_ERRORS, "OFF")]),
            PolicyOutcome::Escalate
        );
        // Escalation wins over warning suppression.
        assert_eq!(
            author(&[
                (SUPPRESS_DEVELOPER_ERRORS, "FALSE"),
                (SUPPRESS_DEVELOPER_WARNINGS, "ON"),
            ]),
            PolicyOutcome::Escalate
        );
    }

    #[test]
    fn author_warning_errors_flag_on_keeps_warning() {
        assert_eq!(
            author(&[(SUPPRESS_DEVELOPER_ERRORS, "ON")]),
            PolicyOutcome::Keep
        );
    }

    #[test]
    fn author_warning_empty_errors_flag_is_unset() {
        assert_eq!(author(&[(SUPPRESS_DEVELOPER_ERRORS, "")]), PolicyOutcome::Keep);
    }

    #[test]
    fn author_warning_suppressed() {
        assert_eq!(
            author(&[(SUPPRESS_DEVELOPER_WARNINGS, "ON")]),
            PolicyOutcome::Suppress
        );
        assert_eq!(
            author(&[
                (SUPPRESS_DEVELOPER_ERRORS, "ON"),
                (SUPPRESS_DEVELOPER_WARNINGS, "YES"),
            ]),
            PolicyOutcome::Suppress
        );
    }

    #[test]
    fn deprecation_defaults_to_warning() {
        assert_eq!(deprecation(&[]), PolicyOutcome::Keep);
        assert_eq!(deprecation(&[(WARN_DEPRECATED, "ON")]), PolicyOutcome::Keep);
    }

    #[test]
    fn deprecation_escalates_regardless_of_warn_flag() {
        for warn in ["ON", "OFF", ""] {
            assert_eq!(
                deprecation(&[(ERROR_DEPRECATED, "ON"), (WARN_DEPRECATED, warn)]),
                PolicyOutcome::Escalate
            );
        }
    }

    #[test]
    fn deprecation_suppressed_when_warnings_disabled() {
        assert_eq!(
            deprecation(&[(WARN_DEPRECATED, "OFF")]),
            PolicyOutcome::Suppress
        );
        assert_eq!(
            deprecation(&[(ERROR_DEPRECATED, "OFF"), (WARN_DEPRECATED, "0")]),
            PolicyOutcome::Suppress
        );
    }

    #[test]
    fn apply_escalation() {
        let rule = lookup_keyword("AUTHOR_WARNING").unwrap();
        let c = apply_policy(rule, &defs(&[(SUPPRESS_DEVELOPER_ERRORS, "OFF")])).unwrap();
        assert_eq!(c.display, MessageType::AuthorError);
        assert_eq!(c.level, LogLevel::Error);
        assert!(c.fatal);

        let rule = lookup_keyword("DEPRECATION").unwrap();
        let c = apply_policy(rule, &defs(&[(ERROR_DEPRECATED, "ON")])).unwrap();
        assert_eq!(c.display, MessageType::DeprecationError);
        assert!(c.fatal);
    }

    #[test]
    fn apply_keep_and_suppress() {
        let rule = lookup_keyword("DEPRECATION").unwrap();
        let kept = apply_policy(rule, &Definitions::new()).unwrap();
        assert_eq!(kept.display, MessageType::DeprecationWarning);
        assert_eq!(kept.level, LogLevel::Warning);
        assert!(!kept.fatal);

        assert!(apply_policy(rule, &defs(&[(WARN_DEPRECATED, "OFF")])).is_none());
    }
}
