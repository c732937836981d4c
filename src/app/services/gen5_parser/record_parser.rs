//! Data-row parsing for Gen5 exports
//!
//! A data row carries one timepoint for the open read: an `H:M:S` run
//! timestamp, an ignored temperature/label column, and the well readings in
//! row-major order (column varies fastest). This module converts one such row
//! into grid and time-vector writes on the channel builder.

use tracing::debug;

use super::channel::ChannelBuilder;
use crate::config::PlateConfig;
use crate::constants::{
    cell_token_offset, FIELD_SEPARATOR, OVERFLOW_SENTINEL, TIMESTAMP_SEPARATOR,
};
use crate::{Error, Result};

/// Per-row accounting fed back into the parse statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct RowOutcome {
    /// Cells carrying the overflow sentinel in this row
    pub overflow_cells: usize,

    /// True if the row had only its timestamp token
    pub empty_row: bool,
}

/// Split a data row into its tab-separated tokens, surrounding whitespace
/// removed first
pub fn split_data_row(line: &str) -> Vec<&str> {
    line.trim().split(FIELD_SEPARATOR).collect()
}

/// Convert an `H:M:S` run timestamp to decimal hours.
///
/// Exactly three colon-separated numeric parts; seconds may be fractional.
/// Minutes and seconds fold upward: `hours = h + (m + s/60)/60`. This is
/// plain arithmetic on run time, with no rollover or day handling.
pub fn parse_timestamp_hours(token: &str, line_number: usize, line: &str) -> Result<f64> {
    let parts: Vec<&str> = token.split(TIMESTAMP_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(Error::malformed_timestamp(line_number, line, token));
    }

    let mut components = [0.0f64; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| Error::malformed_timestamp(line_number, line, token))?;
    }

    let [h, m, s] = components;
    Ok(h + (m + s / 60.0) / 60.0)
}

/// Parse one cell token: the overflow sentinel maps to NaN, anything else
/// must be a number.
pub fn parse_cell(token: &str, line_number: usize, line: &str) -> Result<f64> {
    if token == OVERFLOW_SENTINEL {
        return Ok(f64::NAN);
    }

    token
        .trim()
        .parse()
        .map_err(|_| Error::malformed_cell(line_number, line, token))
}

/// Parse one data row into the open channel.
///
/// Claims the next time index, writes the converted timestamp, then fills the
/// configured grid shape from the row's flat token offsets. A row reduced to
/// its timestamp alone leaves every cell of the timepoint missing.
pub fn parse_data_row(
    line: &str,
    line_number: usize,
    config: &PlateConfig,
    channel: &mut ChannelBuilder,
) -> Result<RowOutcome> {
    let tokens = split_data_row(line);
    if config.trace {
        debug!(line_number, tokens = tokens.len(), "data row");
    }

    let hours = parse_timestamp_hours(tokens[0], line_number, line)?;
    let timepoint = channel.advance(line_number)?;
    channel.set_time(timepoint, hours);

    let mut outcome = RowOutcome::default();
    if tokens.len() == 1 {
        // Timestamp-only row: the pre-filled NaNs stand for every well.
        outcome.empty_row = true;
        return Ok(outcome);
    }

    for row in 0..config.n_rows {
        for column in 0..config.n_columns {
            let offset = cell_token_offset(config.n_columns, row, column);
            let token = tokens
                .get(offset)
                .ok_or_else(|| Error::malformed_cell(line_number, line, format!("<missing token {offset}>")))?;

            if *token == OVERFLOW_SENTINEL {
                outcome.overflow_cells += 1;
            }
            let value = parse_cell(token, line_number, line)?;
            channel.set_value(row, column, timepoint, value);
        }
    }

    Ok(outcome)
}
