use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::progress::Progress;

use super::types::{ExecutionResult, MainFolderIndex, RenameFailure, RenamePlan, RenameSpec};

/// Errors that can occur while applying a single rename
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FilesystemError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),
}

/// Options for applying a rename plan
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
}

/// Apply a plan, deepest directories first.
///
/// Failures are reported and recorded but never stop the remaining renames.
pub fn execute_plan(
    plan: &RenamePlan,
    main_folders: &MainFolderIndex,
    options: &RenameOptions,
    progress: &mut Progress,
) -> ExecutionResult {
    let mut result = ExecutionResult::new(options.dry_run);
    let total = plan.len();

    info!(total, dry_run = options.dry_run, "Applying rename plan");

    for (i, spec) in plan.execution_order().enumerate() {
        progress.rename_progress(i + 1, total, &spec.old_path, &spec.new_path);

        if options.dry_run {
            result.renamed.push(spec.clone());
        } else {
            match execute_rename(spec) {
                Ok(()) => result.renamed.push(spec.clone()),
                Err(e) => {
                    warn!("{}", e);
                    progress.rename_failed(&e.to_string());
                    result.failures.push(RenameFailure {
                        spec: spec.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if let Some(main_folder) = main_folders.lookup(spec) {
            // TODO: move the episode folder under its season folder once the
            // behavior for season folders renamed in the same run is settled
            debug!(main_folder = ?main_folder, "Move into main folder not implemented");
            progress.main_folder(main_folder);
        }
    }

    info!(
        renamed = result.renamed.len(),
        failed = result.failures.len(),
        "Rename plan applied"
    );

    result
}

fn execute_rename(spec: &RenameSpec) -> Result<(), RenameError> {
    // rename(2) silently replaces an empty destination directory
    if spec.new_path.exists() && !is_same_directory(&spec.old_path, &spec.new_path) {
        return Err(RenameError::DestinationExists(spec.new_path.clone()));
    }

    info!("Renaming: {} -> {}", spec.old_name(), spec.new_name());

    fs::rename(&spec.old_path, &spec.new_path).map_err(|e| RenameError::FilesystemError {
        from: spec.old_path.display().to_string(),
        to: spec.new_path.display().to_string(),
        source: e,
    })
}

/// Case-insensitive filesystems report a case-only rename target as existing
fn is_same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
