use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to walk directory tree: {0}")]
    WalkError(#[from] walkdir::Error),
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
}

impl DirectoryEntry {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }
}

/// Walk `target` recursively and yield every visible directory, the root included.
///
/// Entries come in lexical depth-first order, so a parent is always yielded
/// before its children. Hidden directories are yielded and walked into;
/// deciding what to do with them is left to the caller.
pub fn scan_tree(
    target: &Path,
) -> Result<impl Iterator<Item = Result<DirectoryEntry, ScannerError>>, ScannerError> {
    debug!(path = ?target, "Scanning directory tree");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let walker = WalkDir::new(target).sort_by_file_name().into_iter();

    Ok(walker.filter_map(|result| match result {
        Ok(entry) if entry.file_type().is_dir() => {
            // Non-UTF-8 names cannot be rebuilt without losing bytes
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!(path = ?entry.path(), "Skipping directory with non-UTF-8 name");
                return None;
            };
            trace!(name = %name, depth = entry.depth(), "Found directory");
            Some(Ok(DirectoryEntry::new(name, entry.into_path())))
        }
        Ok(entry) => {
            trace!(path = ?entry.path(), "Skipping non-directory");
            None
        }
        Err(e) => Some(Err(walk_error(e))),
    }))
}

fn walk_error(err: walkdir::Error) -> ScannerError {
    let denied = err
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied);

    if denied {
        if let Some(path) = err.path() {
            return ScannerError::PermissionDenied(path.to_path_buf());
        }
    }

    ScannerError::WalkError(err)
}
