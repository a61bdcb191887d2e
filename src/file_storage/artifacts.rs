//! Artifact writer and retrieval
//!
//! Names are `<prefix>_<uuid-v4>.<ext>`. A write is only reported as done once
//! the file is back on disk with a non-zero length.

use super::{ensure_dir, is_plain_file_name};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{kind} file was not created correctly at {path:?}: {reason}")]
    Verification {
        kind: ArtifactKind,
        path: PathBuf,
        reason: String,
    },

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Generated file is empty: {0}")]
    Empty(String),
}

/// The three documents of a seminar kit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    SlideDeck,
    Report,
    Transcript,
}

impl ArtifactKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ArtifactKind::SlideDeck | ArtifactKind::Report => "seminar",
            ArtifactKind::Transcript => "qna",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::SlideDeck => "pptx",
            ArtifactKind::Report => "docx",
            ArtifactKind::Transcript => "txt",
        }
    }

    fn file_name(self, id: Uuid) -> String {
        format!("{}_{}.{}", self.prefix(), id, self.extension())
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ArtifactKind::SlideDeck => "PPTX",
            ArtifactKind::Report => "DOCX",
            ArtifactKind::Transcript => "Q&A",
        })
    }
}

/// Media type for a stored artifact, from its extension
pub fn media_type(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .to_string()
}

/// Flat directory of generated artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Open (and create if needed) the artifact directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ArtifactError> {
        let dir = dir.into();
        ensure_dir(&dir).map_err(|source| ArtifactError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `bytes` under a fresh name and verify the result
    pub fn write(&self, kind: ArtifactKind, bytes: &[u8]) -> Result<String, ArtifactError> {
        let name = kind.file_name(Uuid::new_v4());
        let path = self.dir.join(&name);

        fs::write(&path, bytes).map_err(|source| ArtifactError::Io {
            path: path.clone(),
            source,
        })?;

        let size = verify_written(kind, &path)?;
        log::info!("{} created at {:?} ({} bytes)", kind, path, size);
        Ok(name)
    }

    /// Resolve a bare artifact name to its path. Anything that is not a plain
    /// file name is treated as missing.
    pub fn path_of(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        if !is_plain_file_name(name) {
            log::warn!("Rejected artifact name {:?}", name);
            return Err(ArtifactError::NotFound(name.to_string()));
        }
        Ok(self.dir.join(name))
    }

    /// Read an artifact back by name
    pub fn retrieve(&self, name: &str) -> Result<Vec<u8>, ArtifactError> {
        let path = self.path_of(name)?;
        if !path.is_file() {
            log::warn!("File not found: {:?}", path);
            return Err(ArtifactError::NotFound(name.to_string()));
        }

        let bytes = fs::read(&path).map_err(|source| ArtifactError::Io {
            path: path.clone(),
            source,
        })?;
        if bytes.is_empty() {
            log::warn!("File is empty: {:?}", path);
            return Err(ArtifactError::Empty(name.to_string()));
        }

        log::debug!("Serving file {:?} ({} bytes)", path, bytes.len());
        Ok(bytes)
    }
}

fn verify_written(kind: ArtifactKind, path: &Path) -> Result<u64, ArtifactError> {
    let verification = |reason: String| ArtifactError::Verification {
        kind,
        path: path.to_path_buf(),
        reason,
    };

    let metadata = fs::metadata(path).map_err(|e| verification(e.to_string()))?;
    if !metadata.is_file() {
        return Err(verification("not a regular file".to_string()));
    }
    if metadata.len() == 0 {
        return Err(verification("file is empty".to_string()));
    }
    Ok(metadata.len())
}
