//! Conversion pipeline: dialect dispatch, row-width guard, and DDL assembly.
//!
//! A conversion is a single synchronous pass with no side effects beyond
//! its return value. The caller's descriptor is borrowed immutably; the
//! columns are cloned into a working set that the dialect translator and
//! the row-width guard rewrite in place. Any unsupported type aborts the
//! whole conversion before any SQL is returned.

use tracing::{debug, warn};

use crate::config::ConvertConfig;
use crate::core::identifier::{escape_literal, quote_ident};
use crate::core::schema::{ColumnDescriptor, IndexDescriptor, SourceDialect, TableDescriptor};
use crate::dialect::{self, shape_of, TypeShape};
use crate::error::{ConvertError, Result};

/// Convert a table descriptor into a MySQL `CREATE TABLE` statement using
/// the default [`ConvertConfig`].
pub fn to_mysql_ddl(table: &TableDescriptor) -> Result<String> {
    to_mysql_ddl_with(table, &ConvertConfig::default())
}

/// Convert a table descriptor into a MySQL `CREATE TABLE` statement.
///
/// Dispatches on the descriptor's source dialect, rewrites the column
/// types to MySQL, then assembles column, primary-key, and index clauses
/// into one statement.
pub fn to_mysql_ddl_with(table: &TableDescriptor, config: &ConvertConfig) -> Result<String> {
    debug!(
        "converting table {} from {}",
        table.full_name(),
        table.source_dialect
    );

    let mut columns = table.columns.clone();
    match table.source_dialect {
        SourceDialect::Oracle => dialect::oracle::rewrite_columns(&mut columns),
        SourceDialect::SqlServer => dialect::sqlserver::rewrite_columns(&mut columns),
        // Already MySQL-shaped; the shape catalog below still validates
        // every type.
        SourceDialect::MySql => {}
    }

    assemble(table, &mut columns, config)
}

/// Assemble the final statement from MySQL-typed columns.
fn assemble(
    table: &TableDescriptor,
    columns: &mut [ColumnDescriptor],
    config: &ConvertConfig,
) -> Result<String> {
    // Seed with per-column bookkeeping overhead, independent of declared
    // lengths.
    let mut cumulative = config.column_overhead * columns.len() as i32;

    let mut clauses = Vec::with_capacity(columns.len() + 1 + table.indexes.len());
    let mut primary_keys = Vec::new();

    for col in columns.iter_mut() {
        let mut shape = shape_of(&col.data_type).ok_or_else(|| {
            ConvertError::unsupported_type(
                table.name.as_str(),
                col.name.as_str(),
                col.data_type.as_str(),
            )
        })?;

        // Row-width guard: once the declared fixed-width text bytes would
        // push the row past the ceiling, demote to unbounded TEXT. The
        // guard is order-dependent on purpose; columns declared later are
        // the ones that give way.
        if col.data_type.eq_ignore_ascii_case("CHAR")
            || col.data_type.eq_ignore_ascii_case("VARCHAR")
        {
            if cumulative + col.max_length > config.row_width_ceiling {
                warn!(
                    "table {}: column {} ({} bytes) would exceed row width ceiling {}, demoting to TEXT",
                    table.full_name(),
                    col.name,
                    col.max_length,
                    config.row_width_ceiling
                );
                col.data_type = "TEXT".to_string();
                shape = TypeShape::Bare;
            } else {
                cumulative += col.max_length;
            }
        }

        clauses.push(column_clause(col, shape));

        if col.is_primary_key {
            primary_keys.push(quote_ident(&col.name));
        }
    }

    if !primary_keys.is_empty() {
        clauses.push(format!("PRIMARY KEY ({})", primary_keys.join(",")));
    }

    for index in &table.indexes {
        clauses.push(index_clause(index));
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {}.{} ({}) COMMENT '{}';",
        quote_ident(&table.schema),
        quote_ident(&table.name),
        clauses.join(","),
        escape_literal(&table.comment),
    ))
}

/// Render one column clause.
///
/// The COMMENT clause is always present, even when the comment is empty;
/// nullable columns get no explicit null clause.
fn column_clause(col: &ColumnDescriptor, shape: TypeShape) -> String {
    let rendered_type = match shape {
        TypeShape::PrecisionScale => {
            format!("{}({},{})", col.data_type, col.precision, col.scale)
        }
        TypeShape::Length => format!("{}({})", col.data_type, col.max_length),
        TypeShape::Bare => col.data_type.clone(),
    };

    let mut clause = format!("{} {}", quote_ident(&col.name), rendered_type);
    if !col.is_nullable {
        clause.push_str(" NOT NULL");
    }
    clause.push_str(" COMMENT '");
    clause.push_str(&escape_literal(&col.comment));
    clause.push('\'');
    clause
}

/// Render one index clause.
///
/// FULLTEXT/SPATIAL indexes carry their own leading keyword and take no
/// USING clause; index comments, unlike column comments, are omitted when
/// empty.
fn index_clause(index: &IndexDescriptor) -> String {
    let cols = index
        .columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(",");

    let mut sql = format!("{} {}({})", index.kind.keyword(), quote_ident(&index.name), cols);

    if index.kind.supports_method() {
        if let Some(method) = index.method {
            sql.push_str(" USING ");
            sql.push_str(method.as_str());
        }
    }

    if let Some(comment) = index.comment.as_deref() {
        if !comment.is_empty() {
            sql.push_str(" COMMENT '");
            sql.push_str(&escape_literal(comment));
            sql.push('\'');
        }
    }

    sql
}
