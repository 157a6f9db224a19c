use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Path must be under {home}: {path}")]
    OutsideHome { path: PathBuf, home: PathBuf },

    #[error("Path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Path cannot point to a hidden folder: {0}")]
    HiddenDirectory(PathBuf),

    #[error("Unable to resolve current directory: {0}")]
    CurrentDir(#[from] std::io::Error),
}
