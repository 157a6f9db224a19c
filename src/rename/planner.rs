use std::path::Path;
use tracing::{debug, info};

use crate::parser::{classify, is_hidden, Classification};
use crate::scanner::{scan_tree, DirectoryEntry, ScannerError};

use super::name_builder::{build_name, split_tokens};
use super::types::{MainFolderIndex, RenamePlan, RenameSpec};

/// Collects rename specs and season folders while a tree is walked
#[derive(Debug, Default)]
pub struct Planner {
    plan: RenamePlan,
    main_folders: MainFolderIndex,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one directory and record whatever it contributes
    pub fn visit(&mut self, entry: &DirectoryEntry) {
        if is_hidden(&entry.name) {
            debug!(name = %entry.name, "Hidden, skipping");
            return;
        }

        match classify(&entry.name) {
            Classification::MainFolder { key } => {
                debug!(name = %entry.name, "Main folder match");
                self.main_folders.insert(key, entry.path.clone());
            }
            Classification::Episode { matched } => {
                debug!(name = %entry.name, "Episode match");
                self.plan_episode(entry, &matched);
            }
            Classification::NoMatch => {
                debug!(name = %entry.name, "Not a match");
            }
        }
    }

    fn plan_episode(&mut self, entry: &DirectoryEntry, matched: &str) {
        let tokens = split_tokens(matched);

        let Some(built) = build_name(&tokens) else {
            debug!(name = %entry.name, "No usable name, skipping");
            return;
        };

        let spec = RenameSpec::new(
            entry.path.clone(),
            &built.name,
            built.main_folder.as_deref(),
        );

        if spec.is_noop() {
            debug!(name = %entry.name, "Already normalized");
            return;
        }

        self.plan.push(spec);
    }

    pub fn plan(&self) -> &RenamePlan {
        &self.plan
    }

    pub fn main_folders(&self) -> &MainFolderIndex {
        &self.main_folders
    }

    /// Hand the collected state to the executor
    pub fn finish(self) -> (RenamePlan, MainFolderIndex) {
        (self.plan, self.main_folders)
    }
}

/// Walk `root` and build the full rename plan.
/// The first traversal error aborts planning.
pub fn plan_tree(root: &Path) -> Result<(RenamePlan, MainFolderIndex), ScannerError> {
    let mut planner = Planner::new();

    for entry in scan_tree(root)? {
        planner.visit(&entry?);
    }

    info!(
        renames = planner.plan().len(),
        main_folders = planner.main_folders().len(),
        "Planning complete"
    );

    Ok(planner.finish())
}
