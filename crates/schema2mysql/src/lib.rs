//! # schema2mysql
//!
//! Convert a relational table schema captured from one SQL dialect
//! (Oracle, SQL Server, or MySQL itself) into a MySQL `CREATE TABLE`
//! statement.
//!
//! The conversion is a pure function of its input: a dialect-tagged
//! [`TableDescriptor`] goes in, one DDL string (or a typed error) comes
//! out. No I/O, no shared state; separate conversions can run on separate
//! threads freely. Populating the descriptor — typically from a live
//! database's catalog — is the job of an external collaborator.
//!
//! The pipeline:
//!
//! 1. A per-dialect translator rewrites each column's type, length,
//!    precision, and scale to MySQL-compatible values ([`dialect`]).
//! 2. Every rewritten type is validated against the MySQL type shape
//!    catalog; unknown types abort the conversion.
//! 3. A row-width guard demotes fixed-width text columns to `TEXT` when
//!    their cumulative declared width threatens MySQL's row-size limit.
//! 4. Column, primary-key, and index clauses are assembled into one
//!    `CREATE TABLE IF NOT EXISTS` statement ([`convert`]).
//!
//! ## Example
//!
//! ```
//! use schema2mysql::{ColumnDescriptor, SourceDialect, TableDescriptor};
//!
//! let table = TableDescriptor {
//!     source_dialect: SourceDialect::Oracle,
//!     schema: "HR".to_string(),
//!     name: "EMP".to_string(),
//!     comment: String::new(),
//!     columns: vec![ColumnDescriptor {
//!         name: "ID".to_string(),
//!         data_type: "NUMBER".to_string(),
//!         max_length: 0,
//!         precision: 5,
//!         scale: 0,
//!         is_primary_key: true,
//!         is_nullable: false,
//!         comment: String::new(),
//!     }],
//!     indexes: vec![],
//! };
//!
//! let ddl = table.to_mysql_ddl()?;
//! assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS `HR`.`EMP`"));
//! # Ok::<(), schema2mysql::ConvertError>(())
//! ```

pub mod config;
pub mod convert;
pub mod core;
pub mod dialect;
pub mod error;

// Re-exports for convenient access
pub use crate::config::ConvertConfig;
pub use crate::convert::{to_mysql_ddl, to_mysql_ddl_with};
pub use crate::core::schema::{
    ColumnDescriptor, IndexDescriptor, IndexKind, IndexMethod, SourceDialect, TableDescriptor,
};
pub use crate::error::{ConvertError, Result};
