use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Entry name is not valid UTF-8: {0}")]
    InvalidName(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// One item of the target directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    /// Absolute path of the entry
    pub path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    pub fn new(name: String, path: PathBuf, is_dir: bool) -> Self {
        Self { name, path, is_dir }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Result of listing the target directory once.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Canonical absolute path of the listed directory
    pub base: PathBuf,
    pub entries: Vec<Entry>,
}

/// List `target` non-recursively.
///
/// Every entry is returned, hidden ones included; filtering is left to the
/// batch builder. Symlinks are reported as files, never followed.
pub fn scan_directory(target: &Path) -> Result<Listing, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let base = target
        .canonicalize()
        .map_err(|e| permission_or_io(e, target))?;

    let read_dir = fs::read_dir(&base).map_err(|e| permission_or_io(e, target))?;

    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| ScannerError::InvalidName(path.clone()))?;

        let is_dir = entry.file_type()?.is_dir();

        entries.push(Entry::new(name, path, is_dir));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), base = ?base, "Scan complete");

    Ok(Listing { base, entries })
}

fn permission_or_io(err: std::io::Error, target: &Path) -> ScannerError {
    if err.kind() == std::io::ErrorKind::PermissionDenied {
        ScannerError::PermissionDenied(target.to_path_buf())
    } else {
        ScannerError::IoError(err)
    }
}
