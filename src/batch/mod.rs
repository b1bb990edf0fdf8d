mod types;

pub use types::{Batch, Collision, EntryKind, MovePlan};

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::classifier::classify_name;
use crate::dates::{AddedDateProvider, DateLookupError};
use crate::planner::{is_year_directory, plan_directory, plan_file};
use crate::scanner::{scan_directory, Entry, Listing, ScannerError};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Listing(#[from] ScannerError),

    #[error(transparent)]
    Lookup(#[from] DateLookupError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Leave subdirectories where they are
    pub exclude_dirs: bool,
}

/// List `target` once and plan a move for every eligible entry.
pub fn build_batch(
    target: &Path,
    provider: &dyn AddedDateProvider,
    options: &BatchOptions,
) -> Result<Batch, BatchError> {
    let listing = scan_directory(target)?;
    plan_listing(&listing, provider, options)
}

/// Plan moves for an existing listing.
///
/// A single failed date lookup fails the whole batch; no partial plan is
/// ever returned.
pub fn plan_listing(
    listing: &Listing,
    provider: &dyn AddedDateProvider,
    options: &BatchOptions,
) -> Result<Batch, BatchError> {
    let mut plans = Vec::new();

    for entry in listing.entries.iter().filter(|e| is_candidate_file(e)) {
        let added = provider.lookup(&entry.path)?;
        let category = classify_name(&entry.name);
        let relative = plan_file(&entry.name, &added, category);

        trace!(name = %entry.name, %category, %relative, "Planned file");
        plans.push(MovePlan::new(
            &listing.base,
            entry.path.clone(),
            EntryKind::File,
            relative,
        ));
    }

    if options.exclude_dirs {
        debug!("Directories excluded from batch");
    } else {
        for entry in listing.entries.iter().filter(|e| is_candidate_directory(e)) {
            let added = provider.lookup(&entry.path)?;
            let relative = plan_directory(&entry.name, &added);

            trace!(name = %entry.name, %relative, "Planned directory");
            plans.push(MovePlan::new(
                &listing.base,
                entry.path.clone(),
                EntryKind::Directory,
                relative,
            ));
        }
    }

    let batch = Batch::new(listing.base.clone(), plans);

    info!(
        total = batch.len(),
        files = batch.file_count(),
        directories = batch.len() - batch.file_count(),
        "Batch planned"
    );

    Ok(batch)
}

fn is_candidate_file(entry: &Entry) -> bool {
    !entry.is_dir && !entry.is_hidden()
}

fn is_candidate_directory(entry: &Entry) -> bool {
    entry.is_dir && !entry.is_hidden() && !is_year_directory(&entry.name)
}
