//! Single-character classification predicates
//!
//! Direct comparisons instead of regex classes: each predicate answers for
//! exactly one character, and the scanner calls them on every input position.

/// ASCII decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Unicode whitespace (space, tab, newline, and friends).
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// SQL operator symbol that terminates an identifier token.
#[inline]
pub fn is_operator(ch: char) -> bool {
    matches!(
        ch,
        '+' | '=' | '*' | '^' | '/' | '%' | '>' | '<' | '!' | '-'
    )
}
