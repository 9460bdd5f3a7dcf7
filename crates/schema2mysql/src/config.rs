//! Conversion tuning configuration.

use serde::{Deserialize, Serialize};

/// Default row-width ceiling in bytes for the row-width guard.
///
/// Chosen as a safety margin under MySQL's ~65535-byte row limit,
/// reserving headroom for row-format overhead beyond declared lengths.
pub const DEFAULT_ROW_WIDTH_CEILING: i32 = 16_183;

/// Default per-column byte overhead used to seed the cumulative width.
///
/// Approximates MySQL row-format bookkeeping that is paid per column
/// regardless of the declared length.
pub const DEFAULT_COLUMN_OVERHEAD: i32 = 2;

/// Tuning knobs for the DDL assembler's row-width guard.
///
/// The defaults match the values the conversion was originally calibrated
/// with; override them only when targeting a storage engine or row format
/// with a different effective row-size limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Cumulative byte width at which fixed-width text columns are
    /// demoted to TEXT.
    #[serde(default = "default_row_width_ceiling")]
    pub row_width_ceiling: i32,

    /// Bytes of bookkeeping overhead charged per column up front.
    #[serde(default = "default_column_overhead")]
    pub column_overhead: i32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            row_width_ceiling: DEFAULT_ROW_WIDTH_CEILING,
            column_overhead: DEFAULT_COLUMN_OVERHEAD,
        }
    }
}

fn default_row_width_ceiling() -> i32 {
    DEFAULT_ROW_WIDTH_CEILING
}

fn default_column_overhead() -> i32 {
    DEFAULT_COLUMN_OVERHEAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.row_width_ceiling, 16_183);
        assert_eq!(config.column_overhead, 2);
    }

    #[test]
    fn test_empty_json_fills_defaults() {
        let config: ConvertConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.row_width_ceiling, DEFAULT_ROW_WIDTH_CEILING);
        assert_eq!(config.column_overhead, DEFAULT_COLUMN_OVERHEAD);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: ConvertConfig = serde_json::from_str(r#"{"row_width_ceiling": 8000}"#).unwrap();
        assert_eq!(config.row_width_ceiling, 8000);
        assert_eq!(config.column_overhead, DEFAULT_COLUMN_OVERHEAD);
    }
}
