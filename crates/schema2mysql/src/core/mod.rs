//! Core types for dialect-agnostic schema description.
//!
//! - [`schema`]: table, column, and index descriptor types
//! - [`identifier`]: MySQL identifier quoting and literal escaping

pub mod identifier;
pub mod schema;

pub use identifier::{escape_literal, quote_ident};
pub use schema::{
    ColumnDescriptor, IndexDescriptor, IndexKind, IndexMethod, SourceDialect, TableDescriptor,
};
