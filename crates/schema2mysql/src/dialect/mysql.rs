//! MySQL type shape catalog.
//!
//! Maps each supported MySQL type name to how it is rendered in DDL:
//! bare, length-qualified, or precision/scale-qualified. The catalog is
//! also the validity check for the assembler — a type that is not listed
//! here cannot be emitted.

/// How a MySQL type name is rendered in a column clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// Rendered as a bare `TYPE`.
    Bare,
    /// Rendered as `TYPE(length)`.
    Length,
    /// Rendered as `TYPE(precision,scale)`.
    PrecisionScale,
}

/// Look up the shape of a MySQL type name, case-insensitively.
///
/// Returns `None` for any type MySQL DDL generation does not support.
pub fn shape_of(data_type: &str) -> Option<TypeShape> {
    let shape = match data_type.to_uppercase().as_str() {
        // Integer types
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" | "BIGINT" => TypeShape::Bare,

        // Boolean
        "BOOL" | "BOOLEAN" => TypeShape::Bare,

        // Decimal/numeric
        "DECIMAL" | "NUMERIC" | "REAL" => TypeShape::PrecisionScale,

        // Floating point
        "FLOAT" | "DOUBLE" => TypeShape::Bare,

        // Bit strings
        "BIT" => TypeShape::Length,

        // String types
        "CHAR" | "VARCHAR" => TypeShape::Length,
        "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" => TypeShape::Bare,
        "ENUM" | "SET" => TypeShape::Length,

        // Binary types
        "BINARY" | "VARBINARY" => TypeShape::Length,
        "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => TypeShape::Bare,

        // Date/time types
        "DATE" | "TIME" | "DATETIME" | "TIMESTAMP" => TypeShape::Bare,

        // JSON
        "JSON" => TypeShape::Bare,

        // Spatial types
        "GEOMETRY" | "GEOMETRYCOLLECTION" | "LINESTRING" | "MULTILINESTRING" | "MULTIPOINT"
        | "MULTIPOLYGON" | "POINT" | "POLYGON" => TypeShape::Bare,

        _ => return None,
    };
    Some(shape)
}
