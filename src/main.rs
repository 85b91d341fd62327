//! Removes the `displayType` and `sections` display getters from Dart result
//! classes, along with the imports they leave dead.
//!
//! Each file goes through four phases:
//!
//! 1. **Imports**: drop lines importing the result-display libraries
//! 2. **Ranges**: find every marker-anchored getter and the lines it spans
//! 3. **Remove**: delete those ranges and collapse the blank runs left behind
//! 4. **Verify**: refuse the rewrite if class count or brace balance changed
//!
//! Files are independent; a rejected or unreadable file is reported and the
//! run moves on.

mod balance;
mod driver;
mod error;
mod grammar;
mod imports;
mod logging;
mod ranges;
mod recognize;
mod remove;
mod verify;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "getter-prune",
    about = "Remove display getters and their dead imports from Dart sources"
)]
struct Cli {
    /// Files, directories (scanned for *.dart) or glob patterns
    #[arg(required = true)]
    paths: Vec<String>,

    /// Report what would change without writing files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Extra import line text to drop (repeatable)
    #[arg(short = 'x', long = "drop-import")]
    drop_imports: Vec<String>,

    /// Skip the dead import pass
    #[arg(long)]
    no_imports: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> driver::PruneConfig {
        let mut config = driver::PruneConfig {
            dry_run: self.dry_run,
            ..driver::PruneConfig::default()
        };
        if self.no_imports {
            config.import_patterns.clear();
        } else {
            config.import_patterns.extend(self.drop_imports.iter().cloned());
        }
        config
    }
}

const SOURCE_EXTENSION: &str = "dart";

/// Expand the command-line paths into files to process.
///
/// Directories contribute their `*.dart` files (non-recursive) and patterns
/// with glob metacharacters are expanded. Anything else is passed through
/// as-is so a missing file is reported rather than silently dropped.
fn expand_paths(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            let mut found: Vec<PathBuf> = entries
                .flatten()
                .map(|e| e.path())
                .filter(|p| {
                    p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
                })
                .collect();
            found.sort();
            files.extend(found);
            continue;
        }
        if !pattern.contains(['*', '?', '[']) {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Keep first occurrence order; a file named twice is processed once.
    let mut seen = std::collections::HashSet::new();
    files.retain(|p| seen.insert(p.clone()));
    Ok(files)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    let files = expand_paths(&cli.paths)?;

    let mut modified = 0;
    let mut errors = 0;
    for path in &files {
        let report = driver::process_file(path, &config);
        if let Some(line) = report.line(config.dry_run) {
            println!("{line}");
        }
        if report.is_error() {
            errors += 1;
        } else if report.is_modified() {
            modified += 1;
        }
    }

    println!("\nModified: {modified}, Errors: {errors}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("getter-prune").chain(args.iter().copied()))
    }

    #[test]
    fn default_config_keeps_dead_imports() {
        let config = cli(&["a.dart"]).config();
        assert_eq!(config.import_patterns.len(), imports::DEFAULT_DEAD_IMPORTS.len());
        assert!(!config.dry_run);
    }

    #[test]
    fn drop_import_extends_defaults() {
        let config = cli(&["-x", "import 'old.dart';", "a.dart"]).config();
        assert!(config.import_patterns.contains(&"import 'old.dart';".to_string()));
        assert_eq!(config.import_patterns.len(), imports::DEFAULT_DEAD_IMPORTS.len() + 1);
    }

    #[test]
    fn no_imports_clears_patterns() {
        let config = cli(&["--no-imports", "-x", "import 'old.dart';", "a.dart"]).config();
        assert!(config.import_patterns.is_empty());
    }

    #[test]
    fn expands_directory_to_dart_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.dart"), "").unwrap();
        fs::write(dir.path().join("a.dart"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();

        let files = expand_paths(&[dir.path().to_string_lossy().into_owned()]).unwrap();
        assert_eq!(files, vec![dir.path().join("a.dart"), dir.path().join("b.dart")]);
    }

    #[test]
    fn expands_globs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x_result.dart"), "").unwrap();
        fs::write(dir.path().join("y.dart"), "").unwrap();
        let pattern = format!("{}/*_result.dart", dir.path().display());

        let files = expand_paths(&[pattern]).unwrap();
        assert_eq!(files, vec![dir.path().join("x_result.dart")]);
    }

    #[test]
    fn missing_literal_path_is_kept() {
        let files = expand_paths(&["/nonexistent/getter_prune/a.dart".to_string()]).unwrap();
        assert_eq!(files, vec![PathBuf::from("/nonexistent/getter_prune/a.dart")]);
    }

    #[test]
    fn duplicate_paths_are_processed_once() {
        let files = expand_paths(&["a.dart".to_string(), "a.dart".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
