//! Schema descriptor types for tables, columns, and indexes.
//!
//! These types are the input contract of the conversion: an external
//! schema-discovery collaborator (something that reads a live database's
//! catalog) populates them, and [`crate::convert`] turns them into MySQL
//! DDL. All types derive serde so descriptors can also arrive as JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};

/// Source dialect a table descriptor was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceDialect {
    /// Oracle Database.
    #[serde(rename = "Oracle")]
    Oracle,
    /// MySQL/MariaDB (identity translation).
    #[serde(rename = "MySQL")]
    MySql,
    /// Microsoft SQL Server.
    #[serde(rename = "SQLServer")]
    SqlServer,
}

impl SourceDialect {
    /// The catalog-facing dialect tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceDialect::Oracle => "Oracle",
            SourceDialect::MySql => "MySQL",
            SourceDialect::SqlServer => "SQLServer",
        }
    }
}

impl fmt::Display for SourceDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceDialect {
    type Err = ConvertError;

    /// Parse a dialect tag, case-insensitively.
    ///
    /// This is the boundary where unrecognized dialects surface as
    /// [`ConvertError::UnsupportedDialect`]; once a descriptor carries the
    /// enum, per-dialect dispatch is total.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "oracle" => Ok(SourceDialect::Oracle),
            "mysql" => Ok(SourceDialect::MySql),
            "sqlserver" => Ok(SourceDialect::SqlServer),
            _ => Err(ConvertError::unsupported_dialect(s)),
        }
    }
}

/// Table metadata: one table to convert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Dialect the schema was captured from.
    pub source_dialect: SourceDialect,

    /// Schema (database) name.
    pub schema: String,

    /// Table name.
    pub name: String,

    /// Table comment. Always emitted, even when empty.
    #[serde(default)]
    pub comment: String,

    /// Column definitions, in declaration order. Order is preserved in the
    /// generated DDL and drives the row-width guard.
    pub columns: Vec<ColumnDescriptor>,

    /// Secondary indexes, in declaration order.
    #[serde(default)]
    pub indexes: Vec<IndexDescriptor>,
}

impl TableDescriptor {
    /// Get the unquoted, fully qualified table name.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Check whether any column is marked as part of the primary key.
    pub fn has_pk(&self) -> bool {
        self.columns.iter().any(|c| c.is_primary_key)
    }

    /// Convert this table into a MySQL `CREATE TABLE` statement using the
    /// default [`ConvertConfig`].
    pub fn to_mysql_ddl(&self) -> Result<String> {
        crate::convert::to_mysql_ddl(self)
    }

    /// Convert this table into a MySQL `CREATE TABLE` statement with an
    /// explicit [`ConvertConfig`].
    pub fn to_mysql_ddl_with(&self, config: &ConvertConfig) -> Result<String> {
        crate::convert::to_mysql_ddl_with(self, config)
    }
}

/// Column metadata.
///
/// `max_length` applies to character/binary type families; `precision`
/// and `scale` apply to numeric families. Which of them ends up rendered
/// is decided by the MySQL type shape catalog after translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,

    /// Dialect-specific type name (e.g. "NUMBER", "NVARCHAR", "varchar").
    pub data_type: String,

    /// Declared length for string/binary types.
    #[serde(default)]
    pub max_length: i32,

    /// Numeric precision.
    #[serde(default)]
    pub precision: i32,

    /// Numeric scale. May be negative for Oracle NUMBER columns.
    #[serde(default)]
    pub scale: i32,

    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub is_primary_key: bool,

    /// Whether the column allows NULL.
    pub is_nullable: bool,

    /// Column comment. Always emitted, even when empty.
    #[serde(default)]
    pub comment: String,
}

/// Index metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDescriptor {
    /// Index key name, unique within the table.
    pub name: String,

    /// Index kind.
    pub kind: IndexKind,

    /// Index method. Ignored for FullText/Spatial indexes.
    #[serde(default)]
    pub method: Option<IndexMethod>,

    /// Indexed column names; order defines key-part order.
    pub columns: Vec<String>,

    /// Index comment. Unlike column comments, omitted when absent or empty.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Kind of secondary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndexKind {
    /// Plain secondary index.
    Normal,
    /// Unique index.
    Unique,
    /// Full-text index.
    FullText,
    /// Spatial index.
    Spatial,
}

impl IndexKind {
    /// Leading keyword for the index clause in `CREATE TABLE`.
    ///
    /// FullText and Spatial carry their own keyword; everything else,
    /// Unique included, renders as a plain `KEY`.
    pub fn keyword(&self) -> &'static str {
        match self {
            IndexKind::FullText => "FULLTEXT",
            IndexKind::Spatial => "SPATIAL",
            IndexKind::Normal | IndexKind::Unique => "KEY",
        }
    }

    /// Whether a `USING` clause may follow this index kind.
    pub fn supports_method(&self) -> bool {
        !matches!(self, IndexKind::FullText | IndexKind::Spatial)
    }
}

/// Index access method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndexMethod {
    /// B-tree index.
    BTree,
    /// Hash index.
    Hash,
    /// R-tree index.
    RTree,
}

impl IndexMethod {
    /// The DDL spelling of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexMethod::BTree => "BTREE",
            IndexMethod::Hash => "HASH",
            IndexMethod::RTree => "RTREE",
        }
    }
}

impl fmt::Display for IndexMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
