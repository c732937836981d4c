//! Tests for read-title / skip / data line classification

use crate::app::services::gen5_parser::line_classifier::{classify, is_read_title, LineClass};

#[test]
fn test_known_prefixes_are_titles() {
    assert_eq!(classify("600"), LineClass::ReadHeader("600"));
    assert_eq!(classify("GFP"), LineClass::ReadHeader("GFP"));
    assert_eq!(classify("RFP"), LineClass::ReadHeader("RFP"));
    assert_eq!(classify("Ratio"), LineClass::ReadHeader("Ratio"));
    assert_eq!(
        classify("Read 1:485,528"),
        LineClass::ReadHeader("Read 1:485,528")
    );
}

#[test]
fn test_prefix_match_keeps_full_line_as_name() {
    // The whole line is the channel name, not just the matched prefix
    assert_eq!(
        classify("Ratio 485/585"),
        LineClass::ReadHeader("Ratio 485/585")
    );
}

#[test]
fn test_untitled_read_lengths() {
    // 7-char bare excitation,emission pair
    assert!(is_read_title("485,528"));
    // 3-char bare label
    assert!(is_read_title("CFP"));
    // Neighboring lengths are not titles
    assert!(!is_read_title("48,528"));
    assert!(!is_read_title("4855,528"));
}

#[test]
fn test_length_is_counted_in_chars_not_bytes() {
    // Latin-1 exports carry multi-byte-in-UTF-8 symbols; "485,52°" is seven
    // characters but eight bytes
    assert!(is_read_title("485,52\u{b0}"));
}

#[test]
fn test_blank_line_is_skipped() {
    assert_eq!(classify(""), LineClass::Skip);
}

#[test]
fn test_time_label_row_is_skipped() {
    assert_eq!(classify("Time\tT\u{b0} 600:600\tA1\tA2"), LineClass::Skip);
    assert_eq!(classify("Kinetic read Time points"), LineClass::Skip);
}

#[test]
fn test_title_takes_precedence_over_time_skip() {
    // Seven characters containing "Time" is still a title
    assert_eq!(classify("Time500"), LineClass::ReadHeader("Time500"));
}

#[test]
fn test_data_row_fallthrough() {
    assert_eq!(classify("0:30:00\t22.1\t0.5\t0.6"), LineClass::Data);
}

#[test]
fn test_whitespace_only_lines() {
    // Three spaces hits the bare-label length heuristic like any 3-char line
    assert_eq!(classify("   "), LineClass::ReadHeader("   "));
    // Other widths fall through to data and fail downstream as malformed rows
    assert_eq!(classify("  "), LineClass::Data);
}
