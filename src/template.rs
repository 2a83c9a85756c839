//! The bundled project template
//!
//! The template tree is compiled into the binary so an installed scaffolder
//! has nothing to locate on disk. `scaffold` is the whole materialization
//! step: refuse an existing destination, extract the tree, report what was
//! written.

use anyhow::{bail, Context, Result};
use include_dir::{include_dir, Dir, DirEntry};
use std::path::Path;

/// The template tree, embedded at compile time
pub static TEMPLATE: Dir = include_dir!("$CARGO_MANIFEST_DIR/template");

/// What a scaffold run materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub files: usize,
    pub bytes: u64,
}

/// Materialize the template into `target`.
///
/// The destination must not exist yet, not even as a file; nothing is
/// written when it does. Filesystem failures during extraction propagate.
pub fn scaffold(target: &Path) -> Result<ScaffoldReport> {
    if target.exists() {
        bail!("Directory {} already exists", target.display());
    }

    std::fs::create_dir_all(target)
        .with_context(|| format!("Failed to create {}", target.display()))?;

    TEMPLATE
        .extract(target)
        .with_context(|| format!("Failed to extract template into {}", target.display()))?;

    // Report what actually landed on disk, not what the embed claims
    let mut files = 0;
    let mut bytes = 0;
    for entry in walkdir::WalkDir::new(target) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files += 1;
            bytes += entry.metadata()?.len();
        }
    }

    Ok(ScaffoldReport { files, bytes })
}

/// Number of files in the embedded template
#[allow(dead_code)] // library surface; the bin compiles this module too
pub fn file_count(dir: &Dir) -> usize {
    dir.entries()
        .iter()
        .map(|entry| match entry {
            DirEntry::File(_) => 1,
            DirEntry::Dir(sub) => file_count(sub),
        })
        .sum()
}

/// Total byte size of the embedded template
#[allow(dead_code)]
pub fn total_size(dir: &Dir) -> u64 {
    dir.entries()
        .iter()
        .map(|entry| match entry {
            DirEntry::File(file) => file.contents().len() as u64,
            DirEntry::Dir(sub) => total_size(sub),
        })
        .sum()
}
