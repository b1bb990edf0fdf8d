pub mod batch;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod executor;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod planner;
pub mod progress;
pub mod scanner;

pub use batch::{build_batch, plan_listing, Batch, BatchError, BatchOptions, EntryKind, MovePlan};
pub use classifier::{classify, classify_name, extension_of, Category};
pub use config::{Config, DateSource};
pub use dates::{AddedDateProvider, DateLookupError, MetadataDateProvider};
pub use error::{AppError, ExitCode};
pub use executor::{apply_batch, execute, ExecuteError};
pub use planner::{is_year_directory, plan_directory, plan_file};
pub use scanner::{scan_directory, Entry, Listing, ScannerError};
