//! SQL Server → MySQL column type translation.
//!
//! Same shape as the Oracle translator: exact match on the canonical
//! uppercase type names, unknown types left for the shape catalog to
//! reject.

use crate::core::schema::ColumnDescriptor;

/// Rewrite every column of a table from SQL Server types to MySQL types.
pub fn rewrite_columns(columns: &mut [ColumnDescriptor]) {
    for col in columns {
        rewrite_column(col);
    }
}

/// Rewrite a single column in place.
pub fn rewrite_column(col: &mut ColumnDescriptor) {
    match col.data_type.as_str() {
        "BIGINT" | "BINARY" | "DATE" | "DECIMAL" | "INT" | "INTEGER" | "NUMERIC" | "REAL"
        | "SMALLINT" | "TIME" | "TINYINT" => {}
        "BIT" => col.data_type = "TINYINT".to_string(),
        "CHAR" => {
            if col.max_length > 255 {
                col.data_type = "TEXT".to_string();
            }
        }
        "DATETIME" => {
            // Fractional-second digits; DATETIME renders bare so this only
            // matters to downstream consumers of the descriptor.
            col.max_length = 3;
        }
        "DATETIME2" | "DATETIMEOFFSET" | "SMALLDATETIME" => {
            col.data_type = "DATETIME".to_string()
        }
        "DOUBLE PRECISION" | "FLOAT" => col.data_type = "DOUBLE".to_string(),
        "IMAGE" => col.data_type = "LONGBLOB".to_string(),
        "MONEY" => {
            col.data_type = "DECIMAL".to_string();
            col.precision = 15;
            col.scale = 4;
        }
        "NCHAR" => {
            if col.max_length > 255 {
                col.data_type = "TEXT".to_string();
            } else {
                col.data_type = "CHAR".to_string();
            }
        }
        "NTEXT" => col.data_type = "LONGTEXT".to_string(),
        "NVARCHAR" => {
            // NVARCHAR at or below 4000 goes to LONGTEXT rather than
            // VARCHAR. Looks inverted next to the surrounding tiers;
            // preserved as-is, see DESIGN.md.
            if col.max_length > 4000 {
                col.data_type = "VARCHAR".to_string();
                col.max_length = 4000;
            } else {
                col.data_type = "LONGTEXT".to_string();
            }
        }
        "ROWVERSION" | "TIMESTAMP" => {
            col.data_type = "BINARY".to_string();
            col.max_length = 8;
        }
        "SMALLMONEY" => {
            col.data_type = "DECIMAL".to_string();
            col.precision = 6;
            col.scale = 4;
        }
        "TEXT" => col.data_type = "LONGTEXT".to_string(),
        "UNIQUEIDENTIFIER" => {
            col.data_type = "CHAR".to_string();
            col.max_length = 16;
        }
        "VARBINARY" => {
            if col.max_length > 8000 {
                col.data_type = "LONGBLOB".to_string();
            }
        }
        "VARCHAR" => {
            if col.max_length > 8000 {
                col.data_type = "LONGTEXT".to_string();
            }
        }
        "XML" => col.data_type = "LONGTEXT".to_string(),
        _ => {}
    }
}
