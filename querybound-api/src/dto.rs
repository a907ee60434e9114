//! Serializable report types
//!
//! The surrounding detection rule turns a crossing into a security finding;
//! these DTOs are the shapes it attaches to that finding.

use querybound_core::Crossing;

/// A detected boundary crossing, ready for a finding payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingReport {
    /// Last boundary at or before the tainted span's start.
    pub lower: usize,
    /// First boundary strictly inside the tainted span.
    pub upper: usize,
    /// Char offset where the tainted span starts.
    pub index: usize,
    /// Length of the tainted span, in chars.
    pub input_chars: usize,
}

impl CrossingReport {
    /// Build a report from a crossing and the span that produced it.
    pub fn new(crossing: Crossing, index: usize, input_chars: usize) -> Self {
        Self {
            lower: crossing.lower,
            upper: crossing.upper,
            index,
            input_chars,
        }
    }
}

/// Summary of one scan, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    /// Dialect name the policy was derived from.
    pub dialect: String,
    /// Query length in chars.
    pub query_chars: usize,
    /// The boundary offsets the scan produced.
    pub boundaries: Vec<usize>,
}
