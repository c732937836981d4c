//! Line classification for Gen5 well-data exports
//!
//! Each line of the export is one of three things: a read title opening a new
//! channel, a skippable label/blank line, or a data row belonging to the most
//! recently opened channel. There is no grammar; recognition rests on the
//! fixed prefix-or-length heuristic the instrument's export format implies.

use crate::constants::{READ_TITLE_PREFIXES, TIME_LABEL_MARKER, UNTITLED_READ_LENGTHS};

/// Classification of one terminator-stripped export line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A read title; the contained text becomes the channel name
    ReadHeader(&'a str),

    /// A blank line or the instrument's "Time ..." column-label row
    Skip,

    /// A tab-separated data row for the open channel
    Data,
}

/// Classify one line of an export.
///
/// The title check runs before the skip check: a line of title-heuristic
/// length that happens to contain "Time" is still a title.
pub fn classify(line: &str) -> LineClass<'_> {
    if is_read_title(line) {
        LineClass::ReadHeader(line)
    } else if line.is_empty() || line.contains(TIME_LABEL_MARKER) {
        LineClass::Skip
    } else {
        LineClass::Data
    }
}

/// Read-title predicate: a known literal prefix, or one of the bare-label
/// lengths the instrument uses for untitled reads.
///
/// The length is counted in characters, not bytes; exports are Latin-1 and
/// may carry non-ASCII symbols such as the degree sign.
pub fn is_read_title(line: &str) -> bool {
    if READ_TITLE_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
    {
        return true;
    }

    UNTITLED_READ_LENGTHS.contains(&line.chars().count())
}
