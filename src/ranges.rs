//! Whole-file scan for removable getter ranges.

use crate::error::{PruneError, Result};
use crate::grammar::Marker;
use crate::recognize::{self, Recognition};
use std::ops::Range;
use tracing::debug;

/// Scan `lines` top to bottom and collect the range of every recognized
/// getter, in ascending order.
///
/// After a match the scan resumes at the range's end, so ranges never
/// overlap or nest. A getter whose body never closes fails the whole file.
pub fn find_ranges(lines: &[&str]) -> Result<Vec<Range<usize>>> {
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let Some(marker) = Marker::parse(lines[i]) else {
            i += 1;
            continue;
        };
        match recognize::recognize(lines, i, marker) {
            Recognition::SingleLine { end } => {
                debug!(marker = marker.text(), start = i + 1, end, "found single-line getter");
                ranges.push(i..end);
                i = end;
            }
            Recognition::Balanced { end, form } => {
                debug!(marker = marker.text(), ?form, start = i + 1, end, "found getter body");
                ranges.push(i..end);
                i = end;
            }
            Recognition::Unterminated { signature } => {
                return Err(PruneError::UnterminatedBlock {
                    marker_line: i + 1,
                    signature_line: signature + 1,
                });
            }
            Recognition::None => {
                debug!(marker = marker.text(), line = i + 1, "marker not followed by a getter");
                i += 1;
            }
        }
    }
    Ok(ranges)
}
