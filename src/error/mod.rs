mod codes;

pub use codes::ExitCode;

use crate::batch::BatchError;
use crate::dates::DateLookupError;
use crate::executor::ExecuteError;
use crate::manifest::ManifestError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("Target directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Cannot list directory: {message}")]
    ListingError { message: String },

    #[error(transparent)]
    MetadataLookup(#[from] DateLookupError),

    #[error(transparent)]
    Collision(ExecuteError),

    #[error("{source} ({completed} moves already applied)")]
    ApplyError {
        completed: usize,
        #[source]
        source: ExecuteError,
    },

    #[error(transparent)]
    ReportWrite(ExecuteError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::InvalidArguments(_) => ExitCode::InvalidArguments,
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::ListingError { .. } => ExitCode::GeneralError,
            AppError::MetadataLookup(_) => ExitCode::MetadataError,
            AppError::Collision(_) => ExitCode::CollisionError,
            AppError::ApplyError { .. } => ExitCode::ApplyError,
            AppError::ReportWrite(_) => ExitCode::ReportError,
            AppError::Manifest(_) => ExitCode::ManifestError,
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            other @ (ScannerError::InvalidName(_) | ScannerError::IoError(_)) => {
                AppError::ListingError {
                    message: other.to_string(),
                }
            }
        }
    }
}

impl From<BatchError> for AppError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::Listing(e) => e.into(),
            BatchError::Lookup(e) => e.into(),
        }
    }
}

impl From<ExecuteError> for AppError {
    fn from(err: ExecuteError) -> Self {
        match err {
            ExecuteError::Report(_) => AppError::ReportWrite(err),
            ExecuteError::Collision(_) => AppError::Collision(err),
            ExecuteError::CreateDirectory { completed, .. }
            | ExecuteError::Rename { completed, .. } => AppError::ApplyError {
                completed,
                source: err,
            },
        }
    }
}
