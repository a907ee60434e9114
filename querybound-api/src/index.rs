//! Memoizing boundary index
//!
//! Scanning is pure and cheap, but the detection rule asks about many
//! tainted spans of the same query. [`BoundaryIndex`] scans once on first
//! use and answers every subsequent crossing query from the frozen result.

use querybound_core::{find_crossing, scan, Crossing, DialectPolicy};
use std::sync::OnceLock;

/// Boundary list for one query, computed at most once.
///
/// The memo slot is a [`OnceLock`]: concurrent first-time callers are
/// serialized around the compute-and-store step, and the list is immutable
/// once stored. The index is therefore freely shareable across threads.
#[derive(Debug)]
pub struct BoundaryIndex {
    query: String,
    policy: DialectPolicy,
    boundaries: OnceLock<Vec<usize>>,
}

impl BoundaryIndex {
    /// Create an index over `query` with the given dialect policy.
    ///
    /// No scanning happens until the first query against the index.
    pub fn new(query: impl Into<String>, policy: DialectPolicy) -> Self {
        Self {
            query: query.into(),
            policy,
            boundaries: OnceLock::new(),
        }
    }

    /// The query text this index was built over.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The dialect policy in effect for this index.
    pub fn policy(&self) -> &DialectPolicy {
        &self.policy
    }

    /// The memoized boundary list, scanning on first use.
    pub fn boundaries(&self) -> &[usize] {
        self.boundaries.get_or_init(|| {
            let boundaries = scan(&self.query, &self.policy);
            tracing::trace!(
                query_chars = self.query.chars().count(),
                boundary_count = boundaries.len(),
                "scanned query for token boundaries"
            );
            boundaries
        })
    }

    /// Does `input`, starting at char offset `index` within the query, span
    /// across a token boundary?
    ///
    /// `index` must be a valid offset obtained from the caller's own
    /// instrumentation; offsets beyond the query are a caller bug and simply
    /// report no crossing.
    pub fn crosses_boundary(&self, index: usize, input: &str) -> Option<Crossing> {
        let crossing = find_crossing(self.boundaries(), index, input.chars().count());
        if let Some(crossing) = crossing {
            tracing::debug!(
                lower = crossing.lower,
                upper = crossing.upper,
                index,
                input_chars = input.chars().count(),
                "tainted input crosses a token boundary"
            );
        }
        crossing
    }
}
