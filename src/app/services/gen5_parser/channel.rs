//! Per-read parse context
//!
//! Every read title opens a fresh `ChannelBuilder`: a NaN-filled value grid
//! and time vector sized from the plate configuration, plus the running time
//! index for that read alone. Keeping the index on the builder rules out any
//! index bleed between reads.

use ndarray::{Array1, Array3};

use crate::app::models::ReadChannel;
use crate::config::PlateConfig;
use crate::{Error, Result};

/// Accumulates one read's grid and time vector while its data rows stream in
#[derive(Debug, Clone)]
pub struct ChannelBuilder {
    name: String,
    values: Array3<f64>,
    timepoints: Array1<f64>,
    /// Time index the next data row will be written at
    next_index: usize,
}

impl ChannelBuilder {
    /// Open a channel with full-size, NaN-filled buffers
    pub fn open(name: &str, config: &PlateConfig) -> Self {
        let capacity = config.time_capacity();
        Self {
            name: name.to_string(),
            values: Array3::from_elem((config.n_rows, config.n_columns, capacity), f64::NAN),
            timepoints: Array1::from_elem(capacity, f64::NAN),
            next_index: 0,
        }
    }

    /// Read title this channel was opened with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Allocated length of the time dimension
    pub fn time_capacity(&self) -> usize {
        self.timepoints.len()
    }

    /// Claim the time index for the next data row.
    ///
    /// Fails once more data rows arrive than the configuration allocated
    /// timepoint slots for.
    pub fn advance(&mut self, line_number: usize) -> Result<usize> {
        if self.next_index >= self.time_capacity() {
            return Err(Error::capacity_exceeded(
                &self.name,
                self.time_capacity(),
                line_number,
            ));
        }

        let index = self.next_index;
        self.next_index += 1;
        Ok(index)
    }

    /// Record the sample time in hours for a claimed timepoint
    pub fn set_time(&mut self, timepoint: usize, hours: f64) {
        self.timepoints[timepoint] = hours;
    }

    /// Record one well's reading for a claimed timepoint
    pub fn set_value(&mut self, row: usize, column: usize, timepoint: usize, value: f64) {
        self.values[[row, column, timepoint]] = value;
    }

    /// Finish the channel, yielding the immutable output model
    pub fn finish(self) -> ReadChannel {
        ReadChannel {
            name: self.name,
            values: self.values,
            timepoints: self.timepoints,
        }
    }
}
