//! Error types for the schema conversion library.

use thiserror::Error;

/// Main error type for conversion operations.
///
/// Every variant is a caller-input problem: the caller must fix the
/// descriptor and re-invoke. No variant is transient, so there is no
/// retry semantics anywhere in the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The dialect tag on a table descriptor is not one of the
    /// recognized source dialects.
    #[error("Unsupported source dialect: {dialect}")]
    UnsupportedDialect {
        /// The tag as it arrived from the caller.
        dialect: String,
    },

    /// A column's type (after dialect translation) is not present in the
    /// MySQL type shape catalog. Aborts the whole conversion; no partial
    /// DDL is returned.
    #[error("Table {table}, column {column}: unsupported field type {data_type}")]
    UnsupportedType {
        /// Table being converted.
        table: String,
        /// Offending column.
        column: String,
        /// The unrecognized type name.
        data_type: String,
    },
}

impl ConvertError {
    /// Create an UnsupportedDialect error.
    pub fn unsupported_dialect(dialect: impl Into<String>) -> Self {
        ConvertError::UnsupportedDialect {
            dialect: dialect.into(),
        }
    }

    /// Create an UnsupportedType error carrying enough context to locate
    /// the offending column.
    pub fn unsupported_type(
        table: impl Into<String>,
        column: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        ConvertError::UnsupportedType {
            table: table.into(),
            column: column.into(),
            data_type: data_type.into(),
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
