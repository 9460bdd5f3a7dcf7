//! Oracle → MySQL column type translation.
//!
//! Rules are keyed by the canonical uppercase type names Oracle's catalog
//! reports; matching is exact and case-sensitive. A type with no rule is
//! left unchanged and rejected later by the shape catalog.

use crate::core::schema::ColumnDescriptor;

/// Rewrite every column of a table from Oracle types to MySQL types.
pub fn rewrite_columns(columns: &mut [ColumnDescriptor]) {
    for col in columns {
        rewrite_column(col);
    }
}

/// Rewrite a single column in place.
pub fn rewrite_column(col: &mut ColumnDescriptor) {
    match col.data_type.as_str() {
        "BFILE" => {
            col.data_type = "VARCHAR".to_string();
            col.max_length = 255;
        }
        "BINARY_FLOAT" => col.data_type = "FLOAT".to_string(),
        "BINARY_DOUBLE" | "DOUBLE PRECISION" | "FLOAT" | "REAL" => {
            col.data_type = "DOUBLE".to_string()
        }
        "BLOB" | "LONG RAW" => col.data_type = "LONGBLOB".to_string(),
        "CHAR" | "CHARACTER" => {
            // CHAR keeps its name up to MySQL's 255-byte CHAR limit.
            if col.max_length > 255 {
                col.data_type = "VARCHAR".to_string();
            }
        }
        "CLOB" | "LONG" | "NCLOB" | "XMLTYPE" => col.data_type = "LONGTEXT".to_string(),
        "DATE" | "TIMESTAMP" | "TIMESTAMP WITH TIME ZONE" | "TIMESTAMP WITH LOCAL TIME ZONE" => {
            col.data_type = "DATETIME".to_string()
        }
        "DEC" | "DECIMAL" => col.data_type = "DECIMAL".to_string(),
        "INT" | "INTEGER" | "NUMERIC" => {}
        "INTERVAL YEAR TO MONTH" | "INTERVAL DAY TO SECOND" => {
            col.data_type = "VARCHAR".to_string();
            col.max_length = 30;
        }
        "NCHAR" => {
            if col.max_length <= 255 {
                col.data_type = "CHAR".to_string();
            } else {
                col.data_type = "VARCHAR".to_string();
            }
        }
        "NCHAR VARYING" | "NVARCHAR2" => {
            col.data_type = "VARCHAR".to_string();
            col.max_length = 4000;
        }
        "NUMBER" => {
            if col.scale <= 0 {
                col.data_type = integer_type_for(col.precision).to_string();
            } else {
                col.data_type = "DECIMAL".to_string();
            }
        }
        "RAW" => {
            if col.max_length <= 255 {
                col.data_type = "BINARY".to_string();
            } else {
                col.data_type = "VARBINARY".to_string();
            }
        }
        "ROWID" => {
            col.data_type = "CHAR".to_string();
            col.max_length = 10;
        }
        "SMALLINT" => {
            // Oracle stores SMALLINT as a NUMBER(38) alias; keep the full
            // precision rather than narrowing to a MySQL integer type.
            col.data_type = "DECIMAL".to_string();
            col.precision = 38;
        }
        "UROWID" | "VARCHAR" | "VARCHAR2" => col.data_type = "VARCHAR".to_string(),
        _ => {}
    }
}

/// Select the MySQL type for a scale-free NUMBER from its precision.
///
/// Half-open boundaries; anything above DECIMAL's 38-digit ceiling falls
/// back to DOUBLE.
fn integer_type_for(precision: i32) -> &'static str {
    if precision < 3 {
        "TINYINT"
    } else if precision < 5 {
        "SMALLINT"
    } else if precision < 9 {
        "INT"
    } else if precision < 19 {
        "BIGINT"
    } else if precision <= 38 {
        "DECIMAL"
    } else {
        "DOUBLE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(data_type: &str, max_length: i32, precision: i32, scale: i32) -> ColumnDescriptor {
        ColumnDescriptor {
            name: "c".to_string(),
            data_type: data_type.to_string(),
            max_length,
            precision,
            scale,
            is_primary_key: false,
            is_nullable: true,
            comment: String::new(),
        }
    }

    fn rewritten(data_type: &str, max_length: i32, precision: i32, scale: i32) -> ColumnDescriptor {
        let mut col = column(data_type, max_length, precision, scale);
        rewrite_column(&mut col);
        col
    }

    #[test]
    fn test_number_integer_widths() {
        assert_eq!(rewritten("NUMBER", 0, 2, 0).data_type, "TINYINT");
        assert_eq!(rewritten("NUMBER", 0, 4, 0).data_type, "SMALLINT");
        assert_eq!(rewritten("NUMBER", 0, 7, 0).data_type, "INT");
        assert_eq!(rewritten("NUMBER", 0, 15, 0).data_type, "BIGINT");
        assert_eq!(rewritten("NUMBER", 0, 25, 0).data_type, "DECIMAL");
        assert_eq!(rewritten("NUMBER", 0, 40, 0).data_type, "DOUBLE");
    }

    #[test]
    fn test_number_boundaries() {
        assert_eq!(rewritten("NUMBER", 0, 3, 0).data_type, "SMALLINT");
        assert_eq!(rewritten("NUMBER", 0, 5, 0).data_type, "INT");
        assert_eq!(rewritten("NUMBER", 0, 9, 0).data_type, "BIGINT");
        assert_eq!(rewritten("NUMBER", 0, 19, 0).data_type, "DECIMAL");
        assert_eq!(rewritten("NUMBER", 0, 38, 0).data_type, "DECIMAL");
        assert_eq!(rewritten("NUMBER", 0, 39, 0).data_type, "DOUBLE");
    }

    #[test]
    fn test_number_negative_scale_is_integer() {
        assert_eq!(rewritten("NUMBER", 0, 7, -2).data_type, "INT");
    }

    #[test]
    fn test_number_with_scale_is_decimal() {
        assert_eq!(rewritten("NUMBER", 0, 2, 2).data_type, "DECIMAL");
        assert_eq!(rewritten("NUMBER", 0, 40, 2).data_type, "DECIMAL");
    }

    #[test]
    fn test_char_promotes_only_past_255() {
        assert_eq!(rewritten("CHAR", 255, 0, 0).data_type, "CHAR");
        assert_eq!(rewritten("CHAR", 256, 0, 0).data_type, "VARCHAR");
        assert_eq!(rewritten("CHARACTER", 300, 0, 0).data_type, "VARCHAR");
    }

    #[test]
    fn test_nchar_tiers() {
        assert_eq!(rewritten("NCHAR", 200, 0, 0).data_type, "CHAR");
        assert_eq!(rewritten("NCHAR", 300, 0, 0).data_type, "VARCHAR");
    }

    #[test]
    fn test_nvarchar2_forces_length() {
        let col = rewritten("NVARCHAR2", 2000, 0, 0);
        assert_eq!(col.data_type, "VARCHAR");
        assert_eq!(col.max_length, 4000);
    }

    #[test]
    fn test_raw_tiers() {
        assert_eq!(rewritten("RAW", 255, 0, 0).data_type, "BINARY");
        assert_eq!(rewritten("RAW", 2000, 0, 0).data_type, "VARBINARY");
    }

    #[test]
    fn test_large_objects() {
        assert_eq!(rewritten("BLOB", 0, 0, 0).data_type, "LONGBLOB");
        assert_eq!(rewritten("LONG RAW", 0, 0, 0).data_type, "LONGBLOB");
        assert_eq!(rewritten("CLOB", 0, 0, 0).data_type, "LONGTEXT");
        assert_eq!(rewritten("XMLTYPE", 0, 0, 0).data_type, "LONGTEXT");
    }

    #[test]
    fn test_datetime_family() {
        assert_eq!(rewritten("DATE", 0, 0, 0).data_type, "DATETIME");
        assert_eq!(rewritten("TIMESTAMP", 0, 0, 0).data_type, "DATETIME");
        assert_eq!(
            rewritten("TIMESTAMP WITH TIME ZONE", 0, 0, 0).data_type,
            "DATETIME"
        );
    }

    #[test]
    fn test_fixed_substitutions() {
        let bfile = rewritten("BFILE", 0, 0, 0);
        assert_eq!(bfile.data_type, "VARCHAR");
        assert_eq!(bfile.max_length, 255);

        let rowid = rewritten("ROWID", 0, 0, 0);
        assert_eq!(rowid.data_type, "CHAR");
        assert_eq!(rowid.max_length, 10);

        let interval = rewritten("INTERVAL DAY TO SECOND", 0, 0, 0);
        assert_eq!(interval.data_type, "VARCHAR");
        assert_eq!(interval.max_length, 30);

        assert_eq!(rewritten("BINARY_FLOAT", 0, 0, 0).data_type, "FLOAT");
        assert_eq!(rewritten("BINARY_DOUBLE", 0, 0, 0).data_type, "DOUBLE");
        assert_eq!(rewritten("FLOAT", 0, 0, 0).data_type, "DOUBLE");
    }

    #[test]
    fn test_smallint_keeps_full_precision() {
        let col = rewritten("SMALLINT", 0, 38, 0);
        assert_eq!(col.data_type, "DECIMAL");
        assert_eq!(col.precision, 38);
    }

    #[test]
    fn test_dec_normalizes_to_decimal() {
        assert_eq!(rewritten("DEC", 0, 10, 2).data_type, "DECIMAL");
        assert_eq!(rewritten("DECIMAL", 0, 10, 2).data_type, "DECIMAL");
    }

    #[test]
    fn test_mysql_valid_types_pass_through() {
        assert_eq!(rewritten("INT", 0, 0, 0).data_type, "INT");
        assert_eq!(rewritten("INTEGER", 0, 0, 0).data_type, "INTEGER");
        assert_eq!(rewritten("NUMERIC", 0, 10, 2).data_type, "NUMERIC");
    }

    #[test]
    fn test_unknown_type_left_unchanged() {
        assert_eq!(rewritten("SDO_GEOMETRY", 0, 0, 0).data_type, "SDO_GEOMETRY");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        // Catalog names arrive uppercase; a lowercase name is not a rule hit.
        assert_eq!(rewritten("number", 0, 7, 0).data_type, "number");
    }
}
