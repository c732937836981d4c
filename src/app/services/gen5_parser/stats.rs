//! Parsing statistics and result structures for Gen5 export processing

use crate::app::models::PlateData;

/// Parsing result: the organized plate data plus basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Channels in first-seen file order
    pub plate: PlateData,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total lines scanned
    pub lines_scanned: usize,

    /// Read title lines encountered (re-encountered titles count again)
    pub reads_found: usize,

    /// Data rows parsed into timepoints
    pub data_rows: usize,

    /// Blank and column-label lines skipped
    pub lines_skipped: usize,

    /// Cells carrying the overflow sentinel, across all reads
    pub overflow_cells: usize,

    /// Timestamp-only data rows (every well missing for that timepoint)
    pub empty_rows: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_scanned: 0,
            reads_found: 0,
            data_rows: 0,
            lines_skipped: 0,
            overflow_cells: 0,
            empty_rows: 0,
        }
    }

    /// Fraction of data rows that carried well readings, as a percentage
    pub fn populated_row_rate(&self) -> f64 {
        if self.data_rows == 0 {
            0.0
        } else {
            ((self.data_rows - self.empty_rows) as f64 / self.data_rows as f64) * 100.0
        }
    }

    /// True if the export yielded at least one read with data
    pub fn has_data(&self) -> bool {
        self.reads_found > 0 && self.data_rows > 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
