//! Named dialect presets and serializable policy configuration
//!
//! Agent configuration names the dialect of each protected database; this
//! module maps those names to concrete [`DialectPolicy`] values. Fully
//! custom rule sets go through [`PolicyConfig`].

use crate::error::{ApiError, Result};
use querybound_core::DialectPolicy;

/// Built-in dialect presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// ANSI-like defaults: backslash escape, `''` doubling.
    Ansi,
    /// MySQL: backslash escape, both `''` and `""` doubling.
    MySql,
    /// PostgreSQL (standard conforming strings): `''` doubling only.
    PostgreSql,
    /// SQL Server: `''` doubling only.
    SqlServer,
    /// SQLite: `''` doubling only.
    Sqlite,
}

impl Dialect {
    /// Resolve a dialect by name (case-insensitive, common aliases accepted).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ansi" | "standard" | "default" => Ok(Dialect::Ansi),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "postgresql" | "postgres" | "pgsql" => Ok(Dialect::PostgreSql),
            "sqlserver" | "mssql" | "tsql" => Ok(Dialect::SqlServer),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(ApiError::UnsupportedDialect {
                name: name.to_string(),
            }),
        }
    }

    /// The scanning policy for this dialect.
    pub fn policy(&self) -> DialectPolicy {
        match self {
            Dialect::Ansi => DialectPolicy::ansi(),
            Dialect::MySql => DialectPolicy::ansi().with_double_quote_doubling(true),
            Dialect::PostgreSql | Dialect::SqlServer | Dialect::Sqlite => {
                DialectPolicy::ansi().with_escape_char(None)
            }
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Ansi
    }
}

/// Serializable description of a fully custom dialect policy.
///
/// Validates into a [`DialectPolicy`] via `TryFrom`; a description that
/// cannot work (an escape sequence whose open and close characters are the
/// same, or delimited by a quote) is rejected with
/// [`ApiError::InvalidPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyConfig {
    /// Escape character recognized inside literals, if any.
    pub escape_char: Option<char>,
    /// Vendor escape-sequence delimiters, if any.
    pub escape_sequence: Option<(char, char)>,
    /// Whether `''` is an escaped quote.
    pub single_quote_doubling: bool,
    /// Whether `""` is an escaped quote.
    pub double_quote_doubling: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            escape_char: Some('\\'),
            escape_sequence: None,
            single_quote_doubling: true,
            double_quote_doubling: false,
        }
    }
}

impl TryFrom<PolicyConfig> for DialectPolicy {
    type Error = ApiError;

    fn try_from(config: PolicyConfig) -> Result<DialectPolicy> {
        let mut policy = DialectPolicy::ansi()
            .with_escape_char(config.escape_char)
            .with_single_quote_doubling(config.single_quote_doubling)
            .with_double_quote_doubling(config.double_quote_doubling);

        if let Some((start, end)) = config.escape_sequence {
            if start == end {
                return Err(ApiError::InvalidPolicy {
                    reason: format!("escape sequence open and close are both {start:?}"),
                });
            }
            if start == '\'' || start == '"' || end == '\'' || end == '"' {
                return Err(ApiError::InvalidPolicy {
                    reason: "escape sequence delimited by a quote character".to_string(),
                });
            }
            policy = policy.with_escape_sequence(start, end);
        }

        Ok(policy)
    }
}
