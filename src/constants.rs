//! Application constants for the Gen5 processor
//!
//! This module contains the format constants, sentinel tokens, and default
//! values used throughout the Gen5 export parser.

// =============================================================================
// Read Title Detection
// =============================================================================

/// Literal prefixes that identify a read title line in a Gen5 well-data export.
///
/// Gen5 titles reads either by kind ("Read 1:485,528"), by fluorophore
/// ("GFP", "RFP"), by absorbance wavelength ("600"), or by derived series
/// ("Ratio").
pub const READ_TITLE_PREFIXES: &[&str] = &["Read", "GFP", "RFP", "600", "Ratio"];

/// Line lengths (terminator-stripped) that identify an untitled read label.
///
/// Short untitled reads appear as a bare excitation,emission pair such as
/// "485,528" (7 chars) or a bare 3-char label. The lengths are measured on
/// the line content without its terminator.
pub const UNTITLED_READ_LENGTHS: &[usize] = &[3, 7];

/// Substring marking the instrument's column-label row ("Time T° 600:600 ...").
pub const TIME_LABEL_MARKER: &str = "Time";

// =============================================================================
// Data Row Layout
// =============================================================================

/// Sentinel emitted by the instrument for a saturated/out-of-range reading.
pub const OVERFLOW_SENTINEL: &str = "OVRFLW";

/// Tokens preceding the first cell value in a data row: the timestamp and the
/// temperature/label column.
pub const DATA_PREAMBLE_TOKENS: usize = 2;

/// Field separator within a data row.
pub const FIELD_SEPARATOR: char = '\t';

/// Separator between the hour, minute, and second components of a timestamp.
pub const TIMESTAMP_SEPARATOR: char = ':';

// =============================================================================
// Well-Known Read Names
// =============================================================================

/// Read names as they appear in exports with standard Gen5 naming.
pub mod reads {
    /// Optical density at 600 nm
    pub const OD600: &str = "600";

    /// Green fluorescent protein channel
    pub const GFP: &str = "GFP";

    /// Red fluorescent protein channel
    pub const RFP: &str = "RFP";

    /// Derived fluorescence ratio series
    pub const RATIO: &str = "Ratio";
}

// =============================================================================
// Plate Geometry Defaults
// =============================================================================

/// Standard microplate formats as (rows, columns)
pub mod plate_formats {
    /// 24-well plate
    pub const WELLS_24: (usize, usize) = (4, 6);

    /// 96-well plate
    pub const WELLS_96: (usize, usize) = (8, 12);

    /// 384-well plate
    pub const WELLS_384: (usize, usize) = (16, 24);
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Flat token offset of a cell within a data row.
///
/// Cell values are row-major after the preamble tokens, with the column index
/// varying fastest.
pub fn cell_token_offset(n_columns: usize, row: usize, column: usize) -> usize {
    n_columns * row + DATA_PREAMBLE_TOKENS + column
}
