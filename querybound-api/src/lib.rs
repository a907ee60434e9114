//! Public API for querybound SQL token-boundary crossing detection
//!
//! This crate is the stable surface a runtime injection-detection rule
//! builds on. It wraps the pure scanner from `querybound-core` with named
//! dialect presets, a memoizing [`BoundaryIndex`], and serializable report
//! types.
//!
//! # Example
//!
//! ```rust
//! use querybound_api::{BoundaryIndex, Dialect};
//!
//! let query = "SELECT * FROM users WHERE name = 'bob'";
//! let index = BoundaryIndex::new(query, Dialect::Ansi.policy());
//!
//! // The intended value stays inside its literal slot.
//! assert!(index.crosses_boundary(34, "bob").is_none());
//!
//! // An escaped payload at the same offset crosses into new tokens.
//! assert!(index.crosses_boundary(34, "bob' OR '1'='1").is_some());
//! ```

#![warn(missing_docs)]

pub mod dialect;
#[cfg(feature = "serde")]
pub mod dto;
pub mod error;
pub mod index;

// Re-export key types
pub use dialect::{Dialect, PolicyConfig};
#[cfg(feature = "serde")]
pub use dto::{CrossingReport, ScanReport};
pub use error::{ApiError, Result};
pub use index::BoundaryIndex;
pub use querybound_core::{find_crossing, scan, Crossing, DialectPolicy};

/// One-shot crossing query with the default (ANSI-like) policy.
///
/// Scans `query` fresh on every call; use [`BoundaryIndex`] when the same
/// query is checked repeatedly.
pub fn crosses_boundary(query: &str, index: usize, input: &str) -> Option<Crossing> {
    let boundaries = scan(query, &DialectPolicy::default());
    find_crossing(&boundaries, index, input.chars().count())
}

/// One-shot crossing query with a named dialect preset.
pub fn crosses_boundary_with_dialect(
    query: &str,
    index: usize,
    input: &str,
    dialect: Dialect,
) -> Option<Crossing> {
    let boundaries = scan(query, &dialect.policy());
    find_crossing(&boundaries, index, input.chars().count())
}
