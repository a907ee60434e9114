//! Single-pass token-boundary scanner
//!
//! Walks a SQL query left to right once and records the char offset of every
//! lexical region change: token starts, operator and whitespace cuts, quoted
//! literal open/close, and comment edges. The scanner is deliberately not a
//! SQL parser; it never validates syntax and it accepts any string,
//! including unterminated literals and comments, without failing.

use crate::chars;
use crate::dialect::DialectPolicy;

/// Persistent scanner state between input positions.
///
/// Comments, vendor escape sequences, and escape-char skips never survive an
/// outer-loop step; they are resolved in place by bounded forward searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between tokens, waiting for the next one to start.
    ExpectingToken,
    /// Inside an identifier/keyword-like token.
    InsideToken,
    /// Inside a numeric literal (digits and dots).
    InsideNumber,
    /// Inside a single-quoted string literal.
    InsideSingleQuote,
    /// Inside a double-quoted region (identifier or string, by dialect).
    InsideDoubleQuote,
}

/// Scans `query` and returns the ordered list of token-boundary offsets.
///
/// Offsets are char offsets into `query`, non-decreasing, and may include
/// `query.chars().count()` when a comment runs to the end of the input.
/// The scan is a pure function of `(query, policy)`: total, deterministic,
/// and linear in the query length.
pub fn scan(query: &str, policy: &DialectPolicy) -> Vec<usize> {
    let chars: Vec<char> = query.chars().collect();
    let len = chars.len();
    let mut boundaries = Vec::new();
    let mut state = ScanState::ExpectingToken;

    let mut i = 0;
    while i < len {
        let ch = chars[i];
        match state {
            ScanState::ExpectingToken | ScanState::InsideToken => {
                let in_token = state == ScanState::InsideToken;
                if ch == '\'' {
                    boundaries.push(i);
                    state = ScanState::InsideSingleQuote;
                } else if ch == '"' {
                    boundaries.push(i);
                    state = ScanState::InsideDoubleQuote;
                } else if ch == '-' && chars.get(i + 1) == Some(&'-') {
                    boundaries.push(i);
                    i = line_comment_end(&chars, i + 1);
                    boundaries.push(i);
                    state = ScanState::ExpectingToken;
                } else if ch == '/' && chars.get(i + 1) == Some(&'*') {
                    boundaries.push(i);
                    i = block_comment_end(&chars, i + 2);
                    boundaries.push(i);
                    // A block comment resumes the region it interrupted.
                } else if !in_token && chars::is_digit(ch) {
                    boundaries.push(i);
                    state = ScanState::InsideNumber;
                } else if chars::is_whitespace(ch) || chars::is_operator(ch) {
                    // Operators and whitespace cut a token but start none.
                    if in_token {
                        boundaries.push(i);
                    }
                    state = ScanState::ExpectingToken;
                } else if !in_token {
                    boundaries.push(i);
                    state = ScanState::InsideToken;
                }
            }
            ScanState::InsideNumber => {
                if !chars::is_digit(ch) && ch != '.' {
                    boundaries.push(i);
                    state = ScanState::ExpectingToken;
                }
            }
            ScanState::InsideSingleQuote | ScanState::InsideDoubleQuote => {
                let quote = if state == ScanState::InsideSingleQuote {
                    '\''
                } else {
                    '"'
                };
                if policy.is_escape_char(ch) {
                    // Consume the escaped character verbatim.
                    i += 1;
                } else if policy.supports_escape_sequences()
                    && policy.escape_sequence_start(ch)
                {
                    // Vendor escape sequences are opaque: no boundary inside.
                    i = escape_sequence_end(&chars, i + 1, policy);
                } else if ch == quote {
                    let doubling = if quote == '\'' {
                        policy.allows_single_quote_doubling()
                    } else {
                        policy.allows_double_quote_doubling()
                    };
                    // A doubled quote at the very end of the query has no
                    // partner to pair with and closes the literal.
                    if doubling && chars.get(i + 1) == Some(&quote) {
                        i += 1;
                    } else {
                        boundaries.push(i);
                        state = ScanState::ExpectingToken;
                    }
                }
            }
        }
        i += 1;
    }

    boundaries
}

/// Position of the newline ending a `--` comment, or `chars.len()`.
fn line_comment_end(chars: &[char], from: usize) -> usize {
    chars[from.min(chars.len())..]
        .iter()
        .position(|&ch| ch == '\n' || ch == '\r')
        .map(|offset| from + offset)
        .unwrap_or(chars.len())
}

/// Position of the `/` closing a `/* */` comment, or `chars.len()`.
fn block_comment_end(chars: &[char], from: usize) -> usize {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return i + 1;
        }
        i += 1;
    }
    chars.len()
}

/// Position of the char closing a vendor escape sequence, or `chars.len()`.
fn escape_sequence_end(chars: &[char], from: usize, policy: &DialectPolicy) -> usize {
    chars[from.min(chars.len())..]
        .iter()
        .position(|&ch| policy.escape_sequence_end(ch))
        .map(|offset| from + offset)
        .unwrap_or(chars.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_default(query: &str) -> Vec<usize> {
        scan(query, &DialectPolicy::default())
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(scan_default(""), Vec::<usize>::new());
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(scan_default("   \t\n"), Vec::<usize>::new());
    }

    #[test]
    fn test_simple_comparison() {
        // 'a' starts at 0, '=' cuts at 1, '1' starts a number at 2.
        assert_eq!(scan_default("a=1"), vec![0, 1, 2]);
    }

    #[test]
    fn test_identifier_and_literal() {
        // name starts at 0, '=' cuts at 4, quote opens at 5 and closes at 9
        assert_eq!(scan_default("name='bob'"), vec![0, 4, 5, 9]);
    }

    #[test]
    fn test_number_with_decimal_point() {
        let boundaries = scan_default("1.5+2");
        // number starts at 0, '+' ends it at 3, second number starts at 4
        assert_eq!(boundaries, vec![0, 3, 4]);
    }

    #[test]
    fn test_operator_run_between_tokens() {
        // Operators at ExpectingToken emit nothing.
        assert_eq!(scan_default("a >= 1"), vec![0, 1, 5]);
    }

    #[test]
    fn test_quote_doubling_is_one_literal_quote() {
        assert_eq!(scan_default("'ab''cd'"), vec![0, 7]);
    }

    #[test]
    fn test_quote_doubling_disabled() {
        let policy = DialectPolicy::default().with_single_quote_doubling(false);
        // With doubling off, '' closes at 3 and reopens at 4.
        assert_eq!(scan("'ab''cd'", &policy), vec![0, 3, 4, 7]);
    }

    #[test]
    fn test_closing_quote_as_last_character() {
        // Lookahead past the end means no doubling is possible: closes.
        assert_eq!(scan_default("'ab'"), vec![0, 3]);
    }

    #[test]
    fn test_doubled_quote_pair_ending_the_query() {
        // '' at 3-4 is a complete escaped quote; the literal never closes.
        assert_eq!(scan_default("'ab''"), vec![0]);
    }

    #[test]
    fn test_double_quote_doubling_default_off() {
        // "" closes at 3 and reopens at 4 under the default policy.
        assert_eq!(scan_default("\"ab\"\"cd\""), vec![0, 3, 4, 7]);
    }

    #[test]
    fn test_double_quote_doubling_enabled() {
        let policy = DialectPolicy::default().with_double_quote_doubling(true);
        assert_eq!(scan("\"ab\"\"cd\"", &policy), vec![0, 7]);
    }

    #[test]
    fn test_backslash_escaped_quote_stays_inside() {
        // \' at 3-4 is consumed verbatim; the literal closes at 6.
        assert_eq!(scan_default("'ab\\'c'"), vec![0, 6]);
    }

    #[test]
    fn test_escape_char_disabled() {
        let policy = DialectPolicy::default().with_escape_char(None);
        // Without an escape char the backslash is literal: the quote at 4
        // closes, c starts a token at 5, and the quote at 6 reopens.
        assert_eq!(scan("'ab\\'c'", &policy), vec![0, 4, 5, 6]);
    }

    #[test]
    fn test_trailing_escape_char_terminates() {
        assert_eq!(scan_default("'ab\\"), vec![0]);
    }

    #[test]
    fn test_unterminated_single_quote() {
        assert_eq!(scan_default("'abc"), vec![0]);
    }

    #[test]
    fn test_lone_quote() {
        assert_eq!(scan_default("'"), vec![0]);
    }

    #[test]
    fn test_line_comment_interleaving() {
        // a at 0, space cuts at 1, comment opens at 2, newline at 5, b at 6.
        assert_eq!(scan_default("a --x\nb"), vec![0, 1, 2, 5, 6]);
    }

    #[test]
    fn test_line_comment_to_end_of_query() {
        assert_eq!(scan_default("a --x"), vec![0, 1, 2, 5]);
    }

    #[test]
    fn test_line_comment_carriage_return() {
        assert_eq!(scan_default("--x\rb"), vec![0, 3, 4]);
    }

    #[test]
    fn test_block_comment_inside_token() {
        // Comment opens at 1 and closes on the '/' at 5; the token resumes
        // with c, so no boundary is emitted there.
        assert_eq!(scan_default("a/*b*/c"), vec![0, 1, 5]);
    }

    #[test]
    fn test_block_comment_between_tokens() {
        // a0, space 1, comment opens at 2 and closes at 6, b at 8.
        assert_eq!(scan_default("a /*x*/ b"), vec![0, 1, 2, 6, 8]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(scan_default("/*"), vec![0, 2]);
        assert_eq!(scan_default("a/*bc"), vec![0, 1, 5]);
    }

    #[test]
    fn test_block_comment_with_stray_star() {
        assert_eq!(scan_default("/*a*b*/x"), vec![0, 6, 7]);
    }

    #[test]
    fn test_comment_markers_inside_literal_are_opaque() {
        // Neither -- nor /* open a comment inside a string.
        assert_eq!(scan_default("'--/*'"), vec![0, 5]);
    }

    #[test]
    fn test_escape_sequence_block_is_opaque() {
        let policy = DialectPolicy::default().with_escape_sequence('{', '}');
        // {d '1'} inside the literal hides its inner quotes entirely.
        let query = "'{d '1'}x'";
        assert_eq!(scan(query, &policy), vec![0, 9]);
    }

    #[test]
    fn test_unterminated_escape_sequence() {
        let policy = DialectPolicy::default().with_escape_sequence('{', '}');
        assert_eq!(scan("'{abc", &policy), vec![0]);
    }

    #[test]
    fn test_classic_injection_shape() {
        // x' OR 1=1 -- : the payload splits the literal into many tokens.
        let query = "'x' OR 1=1 --";
        let boundaries = scan_default(query);
        assert_eq!(boundaries, vec![0, 2, 4, 6, 7, 8, 9, 10, 11, 13]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let policy = DialectPolicy::default();
        let query = "SELECT a FROM t WHERE b = 'c''d' -- tail";
        assert_eq!(scan(query, &policy), scan(query, &policy));
    }

    #[test]
    fn test_boundaries_are_non_decreasing() {
        let boundaries = scan_default("a=1 OR 'x''y' /*z*/ --q");
        assert!(boundaries.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_multibyte_offsets_are_char_offsets() {
        // é is one char; the '=' cut lands at char offset 4.
        assert_eq!(scan_default("héllo=1"), vec![0, 5, 6]);
    }
}
