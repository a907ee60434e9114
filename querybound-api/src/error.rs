//! API error types
//!
//! Scanning and crossing queries are total and never fail; errors exist only
//! at the configuration surface, where a dialect name or a custom policy
//! description can be wrong.

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown dialect preset name
    #[error("dialect '{name}' not supported")]
    UnsupportedDialect {
        /// The dialect name that was requested
        name: String,
    },

    /// A custom policy description that cannot be realized
    #[error("invalid dialect policy: {reason}")]
    InvalidPolicy {
        /// Why the policy description is rejected
        reason: String,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
