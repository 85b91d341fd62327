//! Per-file pipeline: import pruning, getter removal, verification, write-back.
//!
//! Every file is handled on its own; a failure in one is reported in its
//! [`FileReport`] and never stops the others.

use crate::error::{PruneError, Result};
use crate::imports;
use crate::ranges;
use crate::remove::RemovalPlan;
use crate::verify;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Pipeline configuration for [`prune_source`] and [`process_file`].
#[derive(Debug, Clone)]
pub struct PruneConfig {
    /// Lines containing any of these are deleted before getter removal.
    pub import_patterns: Vec<String>,
    /// Token counted before and after to detect damaged class structure.
    pub class_keyword: String,
    /// Report outcomes without writing files back.
    pub dry_run: bool,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            import_patterns: imports::DEFAULT_DEAD_IMPORTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            class_keyword: "class ".to_string(),
            dry_run: false,
        }
    }
}

/// Transformed content of one file.
#[derive(Debug, PartialEq, Eq)]
pub struct Pruned {
    pub content: String,
    /// Number of getters removed.
    pub removed: usize,
}

/// Run the full in-memory transformation on one file's content.
///
/// Removal repeats until a scan finds nothing, since deleting one getter can
/// bring a marker that was skipped next to its own getter. The result is
/// verified against `original` whenever it differs from it.
pub fn prune_source(original: &str, config: &PruneConfig) -> Result<Pruned> {
    let mut content = imports::prune_imports(original, &config.import_patterns);
    let mut removed = 0;

    loop {
        let lines: Vec<&str> = content.split('\n').collect();
        let plan = RemovalPlan::new(ranges::find_ranges(&lines)?)?;
        if plan.is_empty() {
            break;
        }
        removed += plan.len();
        content = plan.apply(&lines).join("\n");
    }

    if content != original {
        verify::verify(original, &content, &config.class_keyword)?;
    }
    Ok(Pruned { content, removed })
}

/// What happened to one file.
#[derive(Debug)]
pub enum FileStatus {
    /// The path does not exist.
    Skipped,
    Unmodified,
    /// Content changed and passed verification; `n` getters removed.
    Modified(usize),
    /// The transformation was refused; the file is untouched.
    Rejected(PruneError),
    /// Reading or writing failed.
    Failed(PruneError),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileReport {
    pub fn is_error(&self) -> bool {
        matches!(self.status, FileStatus::Rejected(_) | FileStatus::Failed(_))
    }

    pub fn is_modified(&self) -> bool {
        matches!(self.status, FileStatus::Modified(_))
    }

    /// Summary line for this file, or `None` if there is nothing to say.
    pub fn line(&self, dry_run: bool) -> Option<String> {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        match &self.status {
            FileStatus::Skipped => Some(format!("SKIP: {} (not found)", self.path.display())),
            FileStatus::Unmodified => None,
            FileStatus::Modified(n) if dry_run => {
                Some(format!("OK: {name}: Would remove {n} getter(s)"))
            }
            FileStatus::Modified(n) => Some(format!("OK: {name}: Removed {n} getter(s)")),
            FileStatus::Rejected(e) | FileStatus::Failed(e) => {
                Some(format!("ERROR: {name}: {e}"))
            }
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            PruneError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            PruneError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Transform one file on disk, writing it back only if it changed and
/// passed verification.
pub fn process_file(path: &Path, config: &PruneConfig) -> FileReport {
    let status = match run_file(path, config) {
        Ok(status) => status,
        Err(PruneError::NotFound { .. }) => {
            debug!(path = %path.display(), "not found");
            FileStatus::Skipped
        }
        Err(e @ (PruneError::Read { .. } | PruneError::Write { .. })) => {
            warn!(path = %path.display(), error = %e, "I/O failure");
            FileStatus::Failed(e)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "rejected");
            FileStatus::Rejected(e)
        }
    };
    FileReport {
        path: path.to_path_buf(),
        status,
    }
}

fn run_file(path: &Path, config: &PruneConfig) -> Result<FileStatus> {
    let original = read_source(path)?;
    let pruned = prune_source(&original, config)?;
    if pruned.content == original {
        debug!(path = %path.display(), "no changes needed");
        return Ok(FileStatus::Unmodified);
    }
    if !config.dry_run {
        fs::write(path, &pruned.content).map_err(|source| PruneError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), removed = pruned.removed, "rewrote file");
    }
    Ok(FileStatus::Modified(pruned.removed))
}
