//! Boolean interpretation of configuration values.
//!
//! A configuration value is "on" only when it is one of the affirmative
//! constants. Numbers other than `1` are not affirmative.

const ON_VALUES: &[&str] = &["1", "ON", "YES", "TRUE", "Y"];

/// Returns `true` if `value` is an affirmative constant (case-insensitive).
pub fn is_on(value: &str) -> bool {
    ON_VALUES.iter().any(|on| on.eq_ignore_ascii_case(value))
}

/// Returns `true` if `value` is `NOTFOUND` or ends with `-NOTFOUND`.
pub fn is_notfound(value: &str) -> bool {
    value == "NOTFOUND" || crate::has_suffix(value, "-NOTFOUND")
}
