//! Applying a removal plan to a file's lines.

use crate::error::{PruneError, Result};
use std::ops::Range;

/// Validated, non-overlapping line ranges for one file, sorted by start.
#[derive(Debug, Default)]
pub struct RemovalPlan {
    ranges: Vec<Range<usize>>,
}

impl RemovalPlan {
    /// Sort `ranges` and reject any pair that overlaps.
    pub fn new(mut ranges: Vec<Range<usize>>) -> Result<Self> {
        ranges.sort_by_key(|r| r.start);
        for pair in ranges.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(PruneError::OverlappingRanges {
                    first: pair[0].clone(),
                    second: pair[1].clone(),
                });
            }
        }
        Ok(Self { ranges })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Delete every range from `lines`, then collapse blank-line runs.
    ///
    /// Ranges are removed from the last to the first so earlier indices stay
    /// valid. Ranges reaching past the end are clipped.
    pub fn apply<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        let mut result = lines.to_vec();
        for range in self.ranges.iter().rev() {
            let end = range.end.min(result.len());
            let start = range.start.min(end);
            result.drain(start..end);
        }
        collapse_blank_runs(result)
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Replace every run of two or more blank lines with its first line.
pub fn collapse_blank_runs(lines: Vec<&str>) -> Vec<&str> {
    let mut cleaned = Vec::with_capacity(lines.len());
    let mut prev_blank = false;
    for line in lines {
        let blank = is_blank(line);
        if blank && prev_blank {
            continue;
        }
        cleaned.push(line);
        prev_blank = blank;
    }
    cleaned
}
