//! Core Gen5 export parser implementation
//!
//! This module provides the main parser orchestration: file reading and
//! decoding, the line-by-line driver state machine, and accumulation of
//! finished channels into the result.

use std::path::Path;

use tracing::{debug, info, warn};

use super::channel::ChannelBuilder;
use super::line_classifier::{classify, LineClass};
use super::record_parser::parse_data_row;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::PlateData;
use crate::config::PlateConfig;
use crate::{Error, Result};

/// Parser for Gen5 well-data text exports
///
/// Reconstructs per-read value grids and time vectors from an export whose
/// layout is fixed by the supplied [`PlateConfig`]. One parser instance can
/// process any number of files with the same plate geometry and run timing;
/// each call is an independent single pass.
#[derive(Debug, Clone)]
pub struct Gen5Parser {
    config: PlateConfig,
}

impl Gen5Parser {
    /// Create a new parser for the given plate configuration
    pub fn new(config: PlateConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser was built with
    pub fn config(&self) -> &PlateConfig {
        &self.config
    }

    /// Parse a Gen5 export file and return organized plate data with
    /// statistics.
    ///
    /// The file is decoded as ISO-8859-1, the encoding Gen5 writes its text
    /// exports in.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Organizing Gen5 export: {}", file_path.display());

        let bytes = std::fs::read(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_str(&decode_latin1(&bytes))
    }

    /// Parse already-decoded export content.
    ///
    /// Fatal on the first malformed timestamp or cell, on a data row with no
    /// open read, and on a read outgrowing its timepoint capacity; no partial
    /// result is returned.
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.config.validate()?;
        self.config.log_allocation();

        let mut stats = ParseStats::new();
        let mut plate = PlateData::new();
        let mut open_channel: Option<ChannelBuilder> = None;

        for (i, line) in content.lines().enumerate() {
            let line_number = i + 1;
            stats.lines_scanned += 1;

            if self.config.trace {
                debug!(line_number, chars = line.chars().count(), line, "scan");
            }

            match classify(line) {
                LineClass::ReadHeader(name) => {
                    if let Some(finished) = open_channel.take() {
                        plate.insert(finished.finish());
                    }
                    debug!("Opening read '{}' at line {}", name, line_number);
                    open_channel = Some(ChannelBuilder::open(name, &self.config));
                    stats.reads_found += 1;
                }
                LineClass::Skip => {
                    stats.lines_skipped += 1;
                }
                LineClass::Data => {
                    let channel = open_channel
                        .as_mut()
                        .ok_or_else(|| Error::orphan_data_row(line_number, line))?;

                    let outcome = parse_data_row(line, line_number, &self.config, channel)?;
                    stats.data_rows += 1;
                    stats.overflow_cells += outcome.overflow_cells;
                    if outcome.empty_row {
                        stats.empty_rows += 1;
                    }
                }
            }
        }

        if let Some(finished) = open_channel.take() {
            plate.insert(finished.finish());
        }

        if plate.is_empty() {
            warn!("No read titles found in export");
        }

        info!(
            "Organized {} reads from {} data rows ({} lines)",
            plate.len(),
            stats.data_rows,
            stats.lines_scanned
        );

        Ok(ParseResult { plate, stats })
    }
}

/// Decode ISO-8859-1 bytes.
///
/// Every byte maps to the Unicode code point of the same value, so the decode
/// is total and never fails.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
