mod types;

pub use types::*;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::batch::Batch;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to write manifest file: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to serialize manifest: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Record the first `completed` moves of `batch` at `path`.
pub fn write_manifest(
    batch: &Batch,
    completed: usize,
    path: &Path,
) -> Result<PathBuf, ManifestError> {
    let manifest = create_manifest(batch, completed);
    write_to_path(&manifest, path)
}

fn create_manifest(batch: &Batch, completed: usize) -> Manifest {
    let moves = batch
        .plans()
        .iter()
        .take(completed)
        .map(|plan| ManifestEntry {
            source: plan.source.clone(),
            destination: plan.destination.clone(),
            kind: plan.kind,
        })
        .collect();

    Manifest {
        version: MANIFEST_VERSION.to_string(),
        executed_at: Utc::now(),
        target_directory: batch.base().to_path_buf(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        complete: completed == batch.len(),
        moves,
    }
}

fn write_to_path(manifest: &Manifest, path: &Path) -> Result<PathBuf, ManifestError> {
    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    {
        let file = File::create(&temp_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, manifest)?;
    }

    fs::rename(&temp_path, path)?;

    info!("Manifest written to: {:?}", path);

    Ok(path.to_path_buf())
}
