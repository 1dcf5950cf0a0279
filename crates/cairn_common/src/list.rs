//! Expansion of `;`-separated list values.
//!
//! Configuration values are flat strings; a list is its elements joined with
//! `;`. A `;` can be kept inside an element by escaping it as `\;` or by
//! enclosing it in square brackets.

/// Splits a `;`-separated list value into its non-empty elements.
///
/// `\;` yields a literal `;`; any other backslash is kept together with the
/// character it precedes. A `;` nested inside unescaped `[` `]` does not
/// split. Empty elements are dropped.
pub fn expand_list(value: &str) -> Vec<String> {
    let mut elements = Vec::new();
    if value.is_empty() {
        return elements;
    }
    if !value.contains(';') {
        elements.push(value.to_string());
        return elements;
    }

    let mut current = String::new();
    let mut square_nesting = 0usize;
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(';') => current.push(';'),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            '[' => {
                square_nesting += 1;
                current.push('[');
            }
            ']' => {
                square_nesting = square_nesting.saturating_sub(1);
                current.push(']');
            }
            ';' if square_nesting == 0 => {
                if !current.is_empty() {
                    elements.push(std::mem::take(&mut current));
                }
            }
            other => current.push(other),
        }
    }
    if !current.is_empty() {
        elements.push(current);
    }
    elements
}

/// Escapes `;` in `element` so that it survives a round trip through
/// [`expand_list`] as a single element.
pub fn escape_list_element(element: &str) -> String {
    element.replace(';', "\\;")
}
