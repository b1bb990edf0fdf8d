use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

use crate::cli::Args;

/// Where the "date added" of an entry comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DateSource {
    /// Date the entry was added to its directory (macOS only)
    #[cfg_attr(target_os = "macos", default)]
    Added,
    /// Birth time of the entry
    #[cfg_attr(not(target_os = "macos"), default)]
    Created,
    /// Last modification time of the entry
    Modified,
}

impl fmt::Display for DateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSource::Added => f.write_str("added"),
            DateSource::Created => f.write_str("created"),
            DateSource::Modified => f.write_str("modified"),
        }
    }
}

/// Settings for one invocation, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: PathBuf,
    pub dry_run: bool,
    pub exclude_dirs: bool,
    pub verbose: bool,
    pub date_source: DateSource,
    pub manifest: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            dir: args.dir,
            dry_run: args.dry_run,
            exclude_dirs: args.exclude_dirs,
            verbose: args.verbose,
            date_source: args.date_source,
            manifest: args.manifest,
        }
    }
}
