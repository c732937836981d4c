//! Configuration management and validation.
//!
//! Provides the plate geometry and run-timing parameters a caller must supply
//! for an export to be organized. The export format itself carries no layout
//! information, so these values are the file-format contract: they must match
//! the actual export or parsing fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::plate_formats;
use crate::{Error, Result};

/// Plate geometry and run timing for one export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateConfig {
    /// Number of plate rows represented in the data
    pub n_rows: usize,

    /// Number of plate columns represented in the data
    pub n_columns: usize,

    /// Total reader run time in hours
    pub total_run_time: f64,

    /// Sampling rate in hours
    pub sampling_rate: f64,

    /// Emit per-line diagnostic output while parsing
    #[serde(default)]
    pub trace: bool,
}

impl PlateConfig {
    /// Create a new configuration with validation
    pub fn new(
        n_rows: usize,
        n_columns: usize,
        total_run_time: f64,
        sampling_rate: f64,
    ) -> Result<Self> {
        let config = Self {
            n_rows,
            n_columns,
            total_run_time,
            sampling_rate,
            trace: false,
        };

        config.validate()?;
        Ok(config)
    }

    /// Enable per-line diagnostic output
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Validate configuration values for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if self.n_rows == 0 {
            return Err(Error::configuration("n_rows must be at least 1"));
        }

        if self.n_columns == 0 {
            return Err(Error::configuration("n_columns must be at least 1"));
        }

        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(Error::configuration(format!(
                "sampling_rate {} must be a positive number of hours",
                self.sampling_rate
            )));
        }

        // Zero is legal: a single-timepoint (endpoint) export has no run time.
        if !self.total_run_time.is_finite() || self.total_run_time < 0.0 {
            return Err(Error::configuration(format!(
                "total_run_time {} must be a non-negative number of hours",
                self.total_run_time
            )));
        }

        Ok(())
    }

    /// Number of sampled timepoints implied by the run timing
    pub fn n_time_points(&self) -> usize {
        (self.total_run_time / self.sampling_rate).floor() as usize
    }

    /// Allocated length of the time dimension for every read
    ///
    /// One more than `n_time_points`, so an export that samples at t = 0 and
    /// at every interval boundary fits exactly.
    pub fn time_capacity(&self) -> usize {
        self.n_time_points() + 1
    }

    /// Total wells on the configured plate
    pub fn well_count(&self) -> usize {
        self.n_rows * self.n_columns
    }

    /// Expected token count of a complete data row
    pub fn expected_row_tokens(&self) -> usize {
        crate::constants::DATA_PREAMBLE_TOKENS + self.well_count()
    }

    /// Log the derived allocation sizes
    pub fn log_allocation(&self) {
        debug!(
            "Plate {}x{}: {} timepoint slots per read ({} cells)",
            self.n_rows,
            self.n_columns,
            self.time_capacity(),
            self.well_count() * self.time_capacity()
        );
    }
}

impl Default for PlateConfig {
    fn default() -> Self {
        let (n_rows, n_columns) = plate_formats::WELLS_96;
        Self {
            n_rows,
            n_columns,
            total_run_time: 24.0,
            sampling_rate: 0.25,
            trace: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlateConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.well_count(), 96);
    }

    #[test]
    fn test_time_point_computation() {
        let config = PlateConfig::new(8, 12, 24.0, 0.25).unwrap();
        assert_eq!(config.n_time_points(), 96);
        assert_eq!(config.time_capacity(), 97);
    }

    #[test]
    fn test_time_point_computation_truncates() {
        // 10.0 / 3.0 = 3.33.. timepoints; fractional remainder is dropped
        let config = PlateConfig::new(1, 1, 10.0, 3.0).unwrap();
        assert_eq!(config.n_time_points(), 3);
        assert_eq!(config.time_capacity(), 4);
    }

    #[test]
    fn test_zero_run_time_is_legal() {
        let config = PlateConfig::new(1, 4, 0.0, 0.5).unwrap();
        assert_eq!(config.n_time_points(), 0);
        assert_eq!(config.time_capacity(), 1);
    }

    #[test]
    fn test_rejects_zero_geometry() {
        assert!(PlateConfig::new(0, 12, 24.0, 0.25).is_err());
        assert!(PlateConfig::new(8, 0, 24.0, 0.25).is_err());
    }

    #[test]
    fn test_rejects_bad_timing() {
        assert!(PlateConfig::new(8, 12, 24.0, 0.0).is_err());
        assert!(PlateConfig::new(8, 12, 24.0, -0.25).is_err());
        assert!(PlateConfig::new(8, 12, -1.0, 0.25).is_err());
        assert!(PlateConfig::new(8, 12, f64::NAN, 0.25).is_err());
        assert!(PlateConfig::new(8, 12, 24.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_expected_row_tokens() {
        let config = PlateConfig::new(2, 3, 1.0, 0.5).unwrap();
        assert_eq!(config.expected_row_tokens(), 8);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = PlateConfig::new(4, 6, 12.0, 0.5).unwrap().with_trace(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: PlateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
