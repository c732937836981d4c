//! Test utilities and fixtures for Gen5 parser testing
//!
//! Shared export fixtures and helpers used across the test modules.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::config::PlateConfig;

// Test modules
mod classifier_tests;

/// Plate configuration matching the fixture exports: 2x3 plate, three
/// timepoints (run 1.0 h sampled every 0.5 h)
pub fn create_test_config() -> PlateConfig {
    PlateConfig::new(2, 3, 1.0, 0.5).unwrap()
}

/// A complete two-read export for the 2x3 test plate.
///
/// Mirrors the instrument layout: read title, column-label row, one data row
/// per timepoint, blank line between reads. One well overflows in the last
/// OD timepoint.
pub fn create_test_export() -> String {
    concat!(
        "600\n",
        "Time T\u{b0} 600:600\n",
        "0:00:00\t22.0\t0.11\t0.12\t0.13\t0.21\t0.22\t0.23\n",
        "0:30:00\t22.1\t1.11\t1.12\t1.13\t1.21\t1.22\t1.23\n",
        "1:00:00\t22.2\t2.11\t2.12\tOVRFLW\t2.21\t2.22\t2.23\n",
        "\n",
        "GFP\n",
        "Time T\u{b0} GFP\n",
        "0:00:00\t22.0\t10\t20\t30\t40\t50\t60\n",
        "0:30:00\t22.1\t11\t21\t31\t41\t51\t61\n",
        "1:00:00\t22.2\t12\t22\t32\t42\t52\t62\n",
    )
    .to_string()
}

/// Minimal single-read, single-timepoint export for a 1x4 plate
pub fn create_minimal_export() -> String {
    "600\n00:00:00\tA1\t1.0\t2.0\tOVRFLW\t4.0\n".to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
