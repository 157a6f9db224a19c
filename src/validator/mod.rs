mod types;

pub use types::*;

use crate::parser::is_hidden;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Validate the directory a run will walk and return its absolute form.
///
/// The path must sit under `home`, exist, be a directory and not be hidden.
pub fn validate_target(path: &Path, home: &Path) -> Result<PathBuf, ValidationError> {
    debug!(path = ?path, "Validating target path");

    let absolute = absolutize(path)?;

    debug!(path = ?absolute, "Absolute path");

    if !absolute.starts_with(home) {
        return Err(ValidationError::OutsideHome {
            path: absolute,
            home: home.to_path_buf(),
        });
    }

    if !absolute.exists() {
        return Err(ValidationError::NotFound(absolute));
    }

    if !absolute.is_dir() {
        return Err(ValidationError::NotADirectory(absolute));
    }

    let hidden = absolute
        .file_name()
        .is_some_and(|name| is_hidden(&name.to_string_lossy()));
    if hidden {
        return Err(ValidationError::HiddenDirectory(absolute));
    }

    Ok(absolute)
}

/// Make `path` absolute and resolve `.` and `..` without touching the filesystem
fn absolutize(path: &Path) -> Result<PathBuf, ValidationError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}
