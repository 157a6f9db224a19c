mod codes;

pub use codes::ExitCode;

use crate::scanner::ScannerError;
use crate::validator::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No path given")]
    MissingPath,

    #[error("Unable to determine the home directory")]
    HomeUnavailable,

    #[error("Path must be under {home}: {path}")]
    OutsideHome { path: PathBuf, home: PathBuf },

    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Path cannot point to a hidden folder: {path}")]
    HiddenDirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Traversal failed: {message}")]
    TraversalError { message: String },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Every fatal error ends the run with the same status
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::GeneralError
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::MissingPath => String::from(
                "No directory to process.\n\n\
                 Usage: showfold --path <DIR> [--debug] [--splits] [--dry]",
            ),

            AppError::HomeUnavailable => String::from(
                "Unable to determine your home directory.\n\n\
                 Set the HOME environment variable and try again.",
            ),

            AppError::OutsideHome { path, home } => {
                format!(
                    "The path must be inside your home directory:\n  {}\n\n\
                     Home directory: {}",
                    path.display(),
                    home.display()
                )
            }

            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::HiddenDirectory { path } => {
                format!(
                    "The path cannot point to a hidden folder:\n  {}",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::TraversalError { message } => {
                format!(
                    "Failed while walking the directory tree:\n  {}\n\n\
                     No directories were renamed.",
                    message
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::WalkError(e) => AppError::TraversalError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::OutsideHome { path, home } => AppError::OutsideHome { path, home },
            ValidationError::NotFound(path) => AppError::DirectoryNotFound { path },
            ValidationError::NotADirectory(path) => AppError::NotADirectory { path },
            ValidationError::HiddenDirectory(path) => AppError::HiddenDirectory { path },
            ValidationError::CurrentDir(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}
