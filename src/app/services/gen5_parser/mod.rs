//! Parser for BioTek Gen5 well-data text exports
//!
//! This module organizes the instrument's tab-separated export into per-read
//! 3D value grids and time vectors. The export carries no schema: read titles
//! are recognized by a fixed prefix-or-length heuristic, row/column layout is
//! inferred from flat token offsets, and saturated wells appear as a sentinel
//! token. The parser reproduces those format rules exactly.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and the driver state machine
//! - [`line_classifier`] - Read-title / skip / data-row line classification
//! - [`channel`] - Per-read parse context with its own running time index
//! - [`record_parser`] - Data-row, timestamp, and cell-token parsing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use gen5_processor::{Gen5Parser, PlateConfig};
//!
//! # fn example() -> gen5_processor::Result<()> {
//! let config = PlateConfig::new(1, 4, 0.0, 0.5)?;
//! let parser = Gen5Parser::new(config);
//!
//! let result = parser.parse_str("600\n00:00:00\t22.1\t1.0\t2.0\t3.0\t4.0\n")?;
//! println!(
//!     "Organized {} reads from {} data rows",
//!     result.plate.len(),
//!     result.stats.data_rows
//! );
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod line_classifier;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use channel::ChannelBuilder;
pub use line_classifier::LineClass;
pub use parser::Gen5Parser;
pub use stats::{ParseResult, ParseStats};
