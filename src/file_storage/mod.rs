//! File-based artifact storage
//!
//! Every generated document lands in a single flat output directory
//! (`generated_files/` by default) under a random, collision-free name, and is
//! served back from there by name. Nothing is ever overwritten or deleted.

pub mod artifacts;

pub use artifacts::{media_type, ArtifactError, ArtifactKind, ArtifactStore};

use std::fs;
use std::io;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        log::debug!("Created directory {:?}", path);
    }
    Ok(())
}

/// Whether `name` is a bare file name: no path separators, no NUL, no `..`
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains("..")
        && !name.chars().any(|c| ['/', '\\', '\0'].contains(&c))
}
