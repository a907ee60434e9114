//! Dialect-specific escaping and quoting rules
//!
//! Each SQL dialect differs in how string literals escape their own quote
//! character. The scanner takes these rules as a plain configuration value:
//! a new dialect is a new `DialectPolicy` value, never a new scanner.

/// Escaping/quoting rules for one SQL dialect.
///
/// The default value models an ANSI-like dialect: backslash escapes the next
/// character inside a literal, a doubled `''` is an escaped single quote,
/// and a doubled `""` closes and reopens a quoted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectPolicy {
    escape_char: Option<char>,
    escape_sequence: Option<(char, char)>,
    single_quote_doubling: bool,
    double_quote_doubling: bool,
}

impl Default for DialectPolicy {
    fn default() -> Self {
        Self {
            escape_char: Some('\\'),
            escape_sequence: None,
            single_quote_doubling: true,
            double_quote_doubling: false,
        }
    }
}

impl DialectPolicy {
    /// ANSI-like defaults (see [`Default`]).
    pub fn ansi() -> Self {
        Self::default()
    }

    /// Set or clear the escape character recognized inside quoted literals.
    pub fn with_escape_char(mut self, escape_char: Option<char>) -> Self {
        self.escape_char = escape_char;
        self
    }

    /// Enable a vendor escape-sequence syntax delimited by `start` and `end`.
    ///
    /// Inside a quoted literal, everything from `start` up to the next `end`
    /// is opaque to the scanner.
    pub fn with_escape_sequence(mut self, start: char, end: char) -> Self {
        self.escape_sequence = Some((start, end));
        self
    }

    /// Whether `''` inside a single-quoted literal is an escaped quote.
    pub fn with_single_quote_doubling(mut self, enabled: bool) -> Self {
        self.single_quote_doubling = enabled;
        self
    }

    /// Whether `""` inside a double-quoted region is an escaped quote.
    pub fn with_double_quote_doubling(mut self, enabled: bool) -> Self {
        self.double_quote_doubling = enabled;
        self
    }

    /// Does `ch` escape the character that follows it inside a literal?
    #[inline]
    pub fn is_escape_char(&self, ch: char) -> bool {
        self.escape_char == Some(ch)
    }

    /// Does this dialect have a vendor escape-sequence syntax at all?
    #[inline]
    pub fn supports_escape_sequences(&self) -> bool {
        self.escape_sequence.is_some()
    }

    /// Does `ch` open a vendor escape sequence?
    ///
    /// Only meaningful when [`supports_escape_sequences`] returns true.
    ///
    /// [`supports_escape_sequences`]: Self::supports_escape_sequences
    #[inline]
    pub fn escape_sequence_start(&self, ch: char) -> bool {
        matches!(self.escape_sequence, Some((start, _)) if start == ch)
    }

    /// Does `ch` close a vendor escape sequence?
    #[inline]
    pub fn escape_sequence_end(&self, ch: char) -> bool {
        matches!(self.escape_sequence, Some((_, end)) if end == ch)
    }

    /// Is `''` treated as one literal quote inside a single-quoted string?
    #[inline]
    pub fn allows_single_quote_doubling(&self) -> bool {
        self.single_quote_doubling
    }

    /// Is `""` treated as one literal quote inside a double-quoted region?
    #[inline]
    pub fn allows_double_quote_doubling(&self) -> bool {
        self.double_quote_doubling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let policy = DialectPolicy::default();
        assert!(policy.is_escape_char('\\'));
        assert!(!policy.is_escape_char('/'));
        assert!(!policy.supports_escape_sequences());
        assert!(policy.allows_single_quote_doubling());
        assert!(!policy.allows_double_quote_doubling());
    }

    #[test]
    fn test_builder_overrides() {
        let policy = DialectPolicy::ansi()
            .with_escape_char(None)
            .with_escape_sequence('{', '}')
            .with_double_quote_doubling(true);

        assert!(!policy.is_escape_char('\\'));
        assert!(policy.supports_escape_sequences());
        assert!(policy.escape_sequence_start('{'));
        assert!(policy.escape_sequence_end('}'));
        assert!(!policy.escape_sequence_start('}'));
        assert!(policy.allows_double_quote_doubling());
    }

    #[test]
    fn test_escape_sequence_predicates_without_sequence() {
        let policy = DialectPolicy::default();
        assert!(!policy.escape_sequence_start('{'));
        assert!(!policy.escape_sequence_end('}'));
    }
}
