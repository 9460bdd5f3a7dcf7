//! Per-dialect type translation targeting MySQL.
//!
//! Each translator rewrites a column's type name (and length, precision,
//! or scale where needed) in place, using a fixed rule table keyed by the
//! source dialect's type names:
//!
//! - [`oracle`]: Oracle → MySQL
//! - [`sqlserver`]: SQL Server → MySQL
//! - [`mysql`]: the MySQL type shape catalog every rewritten column is
//!   validated against during assembly
//!
//! Translators never fail on their own: a type they do not recognize is
//! left untouched so the shape catalog rejects it explicitly, rather than
//! being silently defaulted.

pub mod mysql;
pub mod oracle;
pub mod sqlserver;

pub use mysql::{shape_of, TypeShape};
