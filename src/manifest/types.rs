use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::batch::EntryKind;

pub const MANIFEST_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Schema version for compatibility
    pub version: String,

    /// When the moves were applied
    pub executed_at: DateTime<Utc>,

    /// Directory that was reorganized
    pub target_directory: PathBuf,

    /// Tool version that wrote this manifest
    pub tool_version: String,

    /// False when apply stopped early
    pub complete: bool,

    /// Moves that actually happened, in apply order
    pub moves: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub kind: EntryKind,
}
