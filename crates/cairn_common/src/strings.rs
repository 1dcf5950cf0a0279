//! Joining, wrapping, and prefix/suffix tests for building human-readable text.

use std::fmt::{self, Write};

/// Joins the elements of `items` with `separator` between consecutive elements.
///
/// Returns an empty string for an empty sequence. No separator is written
/// before the first or after the last element. Elements only need to be
/// [`Display`](fmt::Display), so characters and numbers join as readily as
/// strings.
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut iter = items.into_iter();
    let mut out = String::new();
    let Some(first) = iter.next() else {
        return out;
    };
    push_display(&mut out, &first);
    for item in iter {
        out.push_str(separator);
        push_display(&mut out, &item);
    }
    out
}

/// Joins the elements of `items`, each bracketed by `prefix` and `suffix`,
/// with `separator` between consecutive elements.
///
/// Equivalent to `prefix + join(items, suffix + separator + prefix) + suffix`
/// for a non-empty sequence; an empty sequence yields an empty string.
pub fn wrap<I>(prefix: &str, items: I, suffix: &str, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut iter = items.into_iter().peekable();
    if iter.peek().is_none() {
        return String::new();
    }
    let glue = crate::cat_views(&[suffix, separator, prefix]);
    crate::cat_views(&[prefix, join(iter, &glue).as_str(), suffix])
}

/// Character-bracket variant of [`wrap`].
pub fn wrap_chars<I>(prefix: char, items: I, suffix: char, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut prefix_buf = [0u8; 4];
    let mut suffix_buf = [0u8; 4];
    wrap(
        prefix.encode_utf8(&mut prefix_buf),
        items,
        suffix.encode_utf8(&mut suffix_buf),
        separator,
    )
}

fn push_display(out: &mut String, item: &impl fmt::Display) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{item}");
}

/// Something that can be tested for at either end of a string.
///
/// Implemented for `char` (tests only the first or last character) and for
/// string slices (exact, case-sensitive, byte-wise comparison).
pub trait Affix {
    /// Returns `true` if `s` starts with this affix.
    fn is_prefix_of(&self, s: &str) -> bool;
    /// Returns `true` if `s` ends with this affix.
    fn is_suffix_of(&self, s: &str) -> bool;
    /// The length of this affix in bytes.
    fn byte_len(&self) -> usize;
}

impl Affix for char {
    fn is_prefix_of(&self, s: &str) -> bool {
        s.starts_with(*self)
    }

    fn is_suffix_of(&self, s: &str) -> bool {
        s.ends_with(*self)
    }

    fn byte_len(&self) -> usize {
        self.len_utf8()
    }
}

impl Affix for &str {
    fn is_prefix_of(&self, s: &str) -> bool {
        s.as_bytes().starts_with(self.as_bytes())
    }

    fn is_suffix_of(&self, s: &str) -> bool {
        s.as_bytes().ends_with(self.as_bytes())
    }

    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl Affix for &String {
    fn is_prefix_of(&self, s: &str) -> bool {
        self.as_str().is_prefix_of(s)
    }

    fn is_suffix_of(&self, s: &str) -> bool {
        self.as_str().is_suffix_of(s)
    }

    fn byte_len(&self) -> usize {
        self.len()
    }
}

/// Returns `true` if `s` starts with `prefix`.
pub fn has_prefix(s: &str, prefix: impl Affix) -> bool {
    prefix.is_prefix_of(s)
}

/// Returns `true` if `s` ends with `suffix`.
pub fn has_suffix(s: &str, suffix: impl Affix) -> bool {
    suffix.is_suffix_of(s)
}

/// Removes `suffix` from the end of `s` if, and only if, `s` ends with it.
pub fn strip_suffix_if_exists(s: &mut String, suffix: impl Affix) {
    if suffix.is_suffix_of(s) {
        s.truncate(s.len() - suffix.byte_len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_chars_of_string() {
        assert_eq!(join("abc".chars(), ";"), "a;b;c");
    }

    #[test]
    fn join_empty() {
        assert_eq!(join(Vec::<String>::new(), ";"), "");
    }

    #[test]
    fn join_single() {
        assert_eq!(join(["a"], ";"), "a");
    }

    #[test]
    fn join_multiple() {
        assert_eq!(join(["a", "b", "c"], ";"), "a;b;c");
        assert_eq!(join(["a", "b", "c"], "<=>"), "a<=>b<=>c");
    }

    #[test]
    fn join_empty_separator() {
        assert_eq!(join(["Hello, ", "world", "!"], ""), "Hello, world!");
    }

    #[test]
    fn join_numbers() {
        assert_eq!(join([1, -2, 3], ", "), "1, -2, 3");
    }

    #[test]
    fn wrap_with_strings() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(wrap("<", &empty, ">", "; "), "");
        assert_eq!(wrap("<", ["abc"], ">", "; "), "<abc>");
        assert_eq!(wrap("<", ["a1", "a2", "a3"], ">", "; "), "<a1>; <a2>; <a3>");
    }

    #[test]
    fn wrap_with_chars_matches_strings() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(wrap_chars('<', &empty, '>', "; "), "");
        assert_eq!(wrap_chars('<', ["abc"], '>', "; "), "<abc>");
        let items = ["a1", "a2", "a3"];
        assert_eq!(
            wrap_chars('<', items, '>', "; "),
            wrap("<", items, ">", "; ")
        );
    }

    #[test]
    fn wrap_search_paths_report() {
        let paths = vec!["/usr/lib".to_string(), "/opt/lib".to_string()];
        assert_eq!(wrap("[", &paths, "]", "\n"), "[/usr/lib]\n[/opt/lib]");
    }

    #[test]
    fn prefix_char() {
        assert!(has_prefix("abc", 'a'));
        assert!(!has_prefix("abc", 'c'));
        assert!(!has_prefix("", 'a'));
    }

    #[test]
    fn prefix_string() {
        let s = "abc";
        assert!(has_prefix(s, "ab"));
        assert!(!has_prefix(s, "bc"));
        assert!(has_prefix(s, s));
        assert!(has_prefix(s, ""));
        assert!(!has_prefix(s, "abcd"));
    }

    #[test]
    fn suffix_char() {
        assert!(has_suffix("abc", 'c'));
        assert!(!has_suffix("abc", 'a'));
        assert!(!has_suffix("", 'c'));
    }

    #[test]
    fn suffix_string() {
        let s = String::from("abc");
        assert!(has_suffix(&s, "bc"));
        assert!(!has_suffix(&s, "ab"));
        assert!(has_suffix(&s, &s));
        assert!(!has_suffix(&s, "xabc"));
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert!(!has_prefix("Abc", "ab"));
        assert!(!has_suffix("abC", 'c'));
    }

    #[test]
    fn strip_suffix_present() {
        let mut s = String::from("libfoo.so");
        strip_suffix_if_exists(&mut s, ".so");
        assert_eq!(s, "libfoo");

        let mut s = String::from("path/");
        strip_suffix_if_exists(&mut s, '/');
        assert_eq!(s, "path");
    }

    #[test]
    fn strip_suffix_absent_is_noop() {
        let mut s = String::from("libfoo.a");
        strip_suffix_if_exists(&mut s, ".so");
        assert_eq!(s, "libfoo.a");

        let mut s = String::from("ab");
        strip_suffix_if_exists(&mut s, "xab");
        assert_eq!(s, "ab");

        let mut s = String::new();
        strip_suffix_if_exists(&mut s, '/');
        assert_eq!(s, "");
    }
}
