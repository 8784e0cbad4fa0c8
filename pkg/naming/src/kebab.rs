//! Kebab-case conversion.
//!
//! Words are split on delimiters (`-`, `_`, ASCII whitespace) and on ASCII
//! case transitions, then joined with a single hyphen. Non-ASCII characters
//! are passed through untouched.

use pkg_constants::naming::WORD_DELIMITER;

/// Convert `s` to kebab-case.
///
/// ```
/// use pkg_naming::kebab_case;
///
/// assert_eq!(kebab_case("MyService"), "my-service");
/// assert_eq!(kebab_case("snake_case name"), "snake-case-name");
/// ```
pub fn kebab_case(s: &str) -> String {
    delimiter_case(s, WORD_DELIMITER)
}

/// Rewrite `s` with `delimiter` between words.
///
/// Walks the input with a one-character lookahead: `curr` is emitted once
/// `next` is known, so `ABc` splits before the `B` (`a-bc`).
fn delimiter_case(s: &str, delimiter: char) -> String {
    let s = s.trim();
    let mut out = String::with_capacity(s.len() + 3);

    let mut prev: Option<char> = None;
    let mut curr: Option<char> = None;
    for next in s.chars() {
        if let Some(c) = curr {
            if is_delimiter(c) {
                // Collapse runs of delimiters into one.
                if !prev.is_some_and(is_delimiter) {
                    out.push(delimiter);
                }
            } else if c.is_ascii_uppercase() {
                let after_lower = prev.is_some_and(|p| p.is_ascii_lowercase());
                let acronym_end =
                    prev.is_some_and(|p| p.is_ascii_uppercase()) && next.is_ascii_lowercase();
                if after_lower || acronym_end {
                    out.push(delimiter);
                }
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        prev = curr;
        curr = Some(next);
    }

    // The last character has no lookahead. A trailing delimiter is copied as-is.
    if let Some(c) = curr {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push(delimiter);
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '-' | '_' | ' ' | '\t' | '\n' | '\r')
}
