//! Data models for Gen5 export processing
//!
//! This module contains the core data structures for representing organized
//! plate-reader measurements: per-read 3D value grids and their parallel time
//! vectors, collected in the order the reads appear in the export.

use ndarray::{Array1, Array3, ArrayView1};

// =============================================================================
// Read Channel Structure
// =============================================================================

/// One measurement channel reconstructed from an export
///
/// Holds every value the instrument reported for this read, indexed by
/// (plate row, plate column, timepoint), together with the sample times in
/// hours. Missing readings — overflowed wells, empty data rows, or timepoint
/// slots the run never reached — are `f64::NAN`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadChannel {
    /// Read title as it appears in the export (e.g. "600", "GFP")
    pub name: String,

    /// Measurement grid, shape (n_rows, n_columns, time capacity)
    pub values: Array3<f64>,

    /// Sample times in hours, length equal to the grid's time dimension
    pub timepoints: Array1<f64>,
}

impl ReadChannel {
    /// Number of plate rows in the grid
    pub fn n_rows(&self) -> usize {
        self.values.dim().0
    }

    /// Number of plate columns in the grid
    pub fn n_columns(&self) -> usize {
        self.values.dim().1
    }

    /// Allocated length of the time dimension
    pub fn time_capacity(&self) -> usize {
        self.values.dim().2
    }

    /// Time series for a single well
    pub fn well(&self, row: usize, column: usize) -> ArrayView1<'_, f64> {
        self.values.slice(ndarray::s![row, column, ..])
    }

    /// A single reading, if the indices are in range
    pub fn value(&self, row: usize, column: usize, timepoint: usize) -> Option<f64> {
        self.values.get((row, column, timepoint)).copied()
    }

    /// Number of leading timepoint slots that were actually written
    ///
    /// Slots past the last parsed data row stay NaN, so the first NaN in the
    /// time vector bounds the populated range.
    pub fn timepoints_written(&self) -> usize {
        self.timepoints
            .iter()
            .position(|t| t.is_nan())
            .unwrap_or(self.timepoints.len())
    }
}

// =============================================================================
// Plate Data Collection
// =============================================================================

/// All channels organized from one export, in first-seen file order
///
/// Order is part of the contract: downstream code iterates reads in the order
/// the instrument wrote them. Re-encountering a read title replaces that
/// channel's contents but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlateData {
    channels: Vec<ReadChannel>,
}

impl PlateData {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True if no channel was found in the export
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Look up a channel by read title
    pub fn channel(&self, name: &str) -> Option<&ReadChannel> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Channel names in file order
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name.as_str()).collect()
    }

    /// Iterate channels in file order
    pub fn iter(&self) -> impl Iterator<Item = &ReadChannel> {
        self.channels.iter()
    }

    /// Insert a finished channel, replacing any existing channel of the same
    /// name in place
    pub fn insert(&mut self, channel: ReadChannel) {
        match self.channels.iter().position(|c| c.name == channel.name) {
            Some(index) => self.channels[index] = channel,
            None => self.channels.push(channel),
        }
    }
}

impl<'a> IntoIterator for &'a PlateData {
    type Item = &'a ReadChannel;
    type IntoIter = std::slice::Iter<'a, ReadChannel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}

impl IntoIterator for PlateData {
    type Item = ReadChannel;
    type IntoIter = std::vec::IntoIter<ReadChannel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.into_iter()
    }
}
