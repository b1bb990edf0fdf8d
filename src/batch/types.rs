use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What kind of entry a plan moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

/// A single planned relocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// Absolute path of the entry today
    pub source: PathBuf,
    pub kind: EntryKind,
    /// Destination relative to the target directory, `/`-separated
    pub relative: String,
    /// Absolute destination path
    pub destination: PathBuf,
}

impl MovePlan {
    pub fn new(base: &Path, source: PathBuf, kind: EntryKind, relative: String) -> Self {
        let destination = relative
            .split('/')
            .fold(base.to_path_buf(), |path, component| path.join(component));

        Self {
            source,
            kind,
            relative,
            destination,
        }
    }

    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Two plans that would land on the same destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub relative: String,
    pub first: PathBuf,
    pub second: PathBuf,
}

/// All moves for one invocation, ordered by relative destination.
#[derive(Debug, Clone)]
pub struct Batch {
    base: PathBuf,
    plans: Vec<MovePlan>,
}

impl Batch {
    /// Build a batch, sorting `plans` by destination.
    ///
    /// The sort is stable, so plans sharing a destination keep their
    /// input order.
    pub fn new(base: PathBuf, mut plans: Vec<MovePlan>) -> Self {
        plans.sort_by(|a, b| a.relative.as_bytes().cmp(b.relative.as_bytes()));
        Self { base, plans }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn plans(&self) -> &[MovePlan] {
        &self.plans
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Adjacent plans with equal destinations.
    pub fn collisions(&self) -> Vec<Collision> {
        self.plans
            .windows(2)
            .filter(|pair| pair[0].relative == pair[1].relative)
            .map(|pair| Collision {
                relative: pair[1].relative.clone(),
                first: pair[0].source.clone(),
                second: pair[1].source.clone(),
            })
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.plans
            .iter()
            .filter(|p| p.kind == EntryKind::File)
            .count()
    }
}
