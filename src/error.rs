//! Per-file failures. None of these abort a run; the driver turns each one
//! into a report line and moves on to the next file.

use std::io;
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line numbers are 1-based.
    #[error(
        "getter at line {signature_line} (marker at line {marker_line}) never closes before end of file"
    )]
    UnterminatedBlock {
        marker_line: usize,
        signature_line: usize,
    },

    #[error("removal ranges overlap: {first:?} and {second:?}")]
    OverlappingRanges {
        first: Range<usize>,
        second: Range<usize>,
    },

    #[error("Class count mismatch ({before} -> {after})")]
    StructuralMismatch {
        before: usize,
        after: usize,
    },

    /// Net `{` minus `}` changed, so a removed range was not self-contained.
    #[error("Brace balance mismatch ({before} -> {after})")]
    BraceImbalance { before: i64, after: i64 },
}

pub type Result<T> = std::result::Result<T, PruneError>;
