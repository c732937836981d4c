//! Gen5 Processor Library
//!
//! A Rust library for organizing BioTek Gen5 plate-reader text exports into
//! structured time-series arrays.
//!
//! Gen5 well-data exports are line-oriented, tab-separated files in which each
//! measurement channel ("read") announces itself with a title line and is
//! followed by one data row per sampled timepoint. This library provides tools
//! for:
//! - Classifying export lines as read titles, label rows, or data rows
//! - Reconstructing per-read 3D value grids (row x column x timepoint) and
//!   parallel time vectors in hours
//! - Converting `H:M:S` run timestamps to decimal hours
//! - Mapping the instrument's overflow sentinel to missing values
//! - Comprehensive error handling with line-level context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod gen5_parser;
    }
}

// Re-export commonly used types
pub use app::models::{PlateData, ReadChannel};
pub use app::services::gen5_parser::{Gen5Parser, ParseResult, ParseStats};
pub use config::PlateConfig;

/// Result type alias for the Gen5 processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for Gen5 export processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Timestamp token could not be parsed as an H:M:S numeric triple
    #[error("Malformed timestamp '{token}' at line {line_number}: {line}")]
    MalformedTimestamp {
        line_number: usize,
        line: String,
        token: String,
    },

    /// Cell token is neither the overflow sentinel nor a parseable number
    #[error("Malformed cell value '{token}' at line {line_number}: {line}")]
    MalformedCell {
        line_number: usize,
        line: String,
        token: String,
    },

    /// More data rows than the precomputed timepoint capacity for a read
    #[error(
        "Read '{channel}' exceeded its timepoint capacity of {capacity} at line {line_number}"
    )]
    CapacityExceeded {
        channel: String,
        capacity: usize,
        line_number: usize,
    },

    /// A data row appeared before any read title line
    #[error("Data row with no open read at line {line_number}: {line}")]
    OrphanDataRow { line_number: usize, line: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed timestamp error
    pub fn malformed_timestamp(
        line_number: usize,
        line: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::MalformedTimestamp {
            line_number,
            line: line.into(),
            token: token.into(),
        }
    }

    /// Create a malformed cell error
    pub fn malformed_cell(
        line_number: usize,
        line: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::MalformedCell {
            line_number,
            line: line.into(),
            token: token.into(),
        }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(
        channel: impl Into<String>,
        capacity: usize,
        line_number: usize,
    ) -> Self {
        Self::CapacityExceeded {
            channel: channel.into(),
            capacity,
            line_number,
        }
    }

    /// Create an orphan data row error
    pub fn orphan_data_row(line_number: usize, line: impl Into<String>) -> Self {
        Self::OrphanDataRow {
            line_number,
            line: line.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
