use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::batch::{Batch, Collision};
use crate::output::write_dry_run_report;
use crate::progress::Progress;

#[cfg(unix)]
const DIR_MODE: u32 = 0o744;

#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Failed to write report: {0}")]
    Report(#[source] io::Error),

    #[error("Two entries would move to {}: {} and {}", .0.relative, .0.first.display(), .0.second.display())]
    Collision(Collision),

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        completed: usize,
        #[source]
        source: io::Error,
    },

    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        completed: usize,
        #[source]
        source: io::Error,
    },
}

impl ExecuteError {
    /// Number of moves applied before the failure
    pub fn completed(&self) -> usize {
        match self {
            ExecuteError::CreateDirectory { completed, .. }
            | ExecuteError::Rename { completed, .. } => *completed,
            ExecuteError::Report(_) | ExecuteError::Collision(_) => 0,
        }
    }
}

/// Either report the batch (dry run) or apply it.
///
/// Returns the number of moves reported or applied.
pub fn execute(
    batch: &Batch,
    dry_run: bool,
    out: &mut impl Write,
    progress: &mut Progress,
) -> Result<usize, ExecuteError> {
    if dry_run {
        for collision in batch.collisions() {
            warn!(destination = %collision.relative, "Destination collision in plan");
            progress.warn(&format!(
                "{} and {} would both move to {}",
                collision.first.display(),
                collision.second.display(),
                collision.relative
            ));
        }

        write_dry_run_report(batch, out).map_err(ExecuteError::Report)?;
        return Ok(batch.len());
    }

    apply_batch(batch, progress)
}

/// Apply every move in order, stopping at the first failure.
///
/// Moves completed before a failure are left in place.
pub fn apply_batch(batch: &Batch, progress: &mut Progress) -> Result<usize, ExecuteError> {
    if let Some(collision) = batch.collisions().into_iter().next() {
        return Err(ExecuteError::Collision(collision));
    }

    let total = batch.len();

    for (i, plan) in batch.plans().iter().enumerate() {
        if let Some(parent) = plan.destination.parent() {
            create_parent(parent).map_err(|source| ExecuteError::CreateDirectory {
                path: parent.to_path_buf(),
                completed: i,
                source,
            })?;
        }

        fs::rename(&plan.source, &plan.destination).map_err(|source| ExecuteError::Rename {
            from: plan.source.clone(),
            to: plan.destination.clone(),
            completed: i,
            source,
        })?;

        debug!(from = ?plan.source, to = ?plan.destination, "Moved");
        progress.move_progress(i + 1, total, &plan.source, &plan.relative);
    }

    info!(count = total, "Batch applied");

    Ok(total)
}

fn create_parent(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(path)
}
