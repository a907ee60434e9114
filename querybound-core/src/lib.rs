//! Token-boundary scanning for SQL text
//!
//! This crate is the pure core of a runtime SQL-injection detection
//! capability. [`scan`] walks a query once, left to right, and returns the
//! ordered char offsets at which one lexical region (identifier, number,
//! operator, quoted literal, comment) ends and the next begins.
//! [`find_crossing`] then answers the detection question: does a substring
//! believed to come from untrusted input span across one of those
//! boundaries? Tainted data confined to a single token slot never crosses;
//! injected syntax does.
//!
//! The crate has zero dependencies and performs no I/O; everything here is
//! a total function of its inputs.
//!
//! # Example
//!
//! ```rust
//! use querybound_core::{find_crossing, scan, DialectPolicy};
//!
//! let query = "SELECT * FROM users WHERE id = '42' OR '1'='1'";
//! let boundaries = scan(query, &DialectPolicy::default());
//!
//! // The value alone fits inside its literal slot...
//! let benign = find_crossing(&boundaries, 32, "42".chars().count());
//! assert!(benign.is_none());
//!
//! // ...but a payload that escapes the quotes straddles a boundary.
//! let payload = "42' OR '1'='1";
//! let crossing = find_crossing(&boundaries, 32, payload.chars().count());
//! assert!(crossing.is_some());
//! ```

pub mod boundary;
pub mod chars;
pub mod dialect;
pub mod scanner;

pub use boundary::{find_crossing, Crossing};
pub use dialect::DialectPolicy;
pub use scanner::scan;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_and_crossing_integration() {
        let boundaries = scan("a=1", &DialectPolicy::default());
        assert_eq!(boundaries, vec![0, 1, 2]);
        assert_eq!(find_crossing(&boundaries, 0, 1), None);
        assert_eq!(
            find_crossing(&boundaries, 0, 2),
            Some(Crossing { lower: 0, upper: 1 })
        );
    }

    #[test]
    fn test_empty_query_never_crosses() {
        let boundaries = scan("", &DialectPolicy::default());
        assert!(boundaries.is_empty());
        assert_eq!(find_crossing(&boundaries, 0, 1), None);
    }
}
