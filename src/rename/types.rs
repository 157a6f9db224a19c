use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A single planned directory rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSpec {
    /// Full path to the directory as found during the walk
    pub old_path: PathBuf,
    /// Sibling path carrying the normalized name
    pub new_path: PathBuf,
    /// Lowercased season folder name this episode belongs to
    pub main_folder: Option<String>,
}

impl RenameSpec {
    pub fn new(old_path: PathBuf, new_name: &str, main_folder: Option<&str>) -> Self {
        let new_path = old_path
            .parent()
            .map(|p| p.join(new_name))
            .unwrap_or_else(|| PathBuf::from(new_name));

        Self {
            old_path,
            new_path,
            main_folder: main_folder.map(|key| key.trim().to_lowercase()),
        }
    }

    /// Old and new paths point at the same directory
    pub fn is_noop(&self) -> bool {
        self.old_path == self.new_path
    }

    pub fn old_name(&self) -> String {
        file_name(&self.old_path)
    }

    pub fn new_name(&self) -> String {
        file_name(&self.new_path)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Renames in the order the walk discovered them
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    specs: Vec<RenameSpec>,
}

impl RenamePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, spec: RenameSpec) {
        self.specs.push(spec);
    }

    pub fn specs(&self) -> &[RenameSpec] {
        &self.specs
    }

    /// Deepest paths first, so no parent is renamed before its children
    pub fn execution_order(&self) -> impl Iterator<Item = &RenameSpec> {
        self.specs.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }
}

/// Season folder keys mapped to the path they were found at
#[derive(Debug, Clone, Default)]
pub struct MainFolderIndex {
    folders: HashMap<String, PathBuf>,
}

impl MainFolderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries replace earlier ones with the same key
    pub fn insert(&mut self, key: String, path: PathBuf) {
        self.folders.insert(key, path);
    }

    pub fn get(&self, key: &str) -> Option<&Path> {
        self.folders.get(key).map(PathBuf::as_path)
    }

    /// Main folder path for a spec, if its season folder was seen
    pub fn lookup(&self, spec: &RenameSpec) -> Option<&Path> {
        spec.main_folder.as_deref().and_then(|key| self.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }
}

/// A rename the executor could not apply
#[derive(Debug, Clone)]
pub struct RenameFailure {
    pub spec: RenameSpec,
    pub message: String,
}

/// Result of running a plan
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// Specs applied (or, on a dry run, that would be applied), in execution order
    pub renamed: Vec<RenameSpec>,
    pub failures: Vec<RenameFailure>,
    pub dry_run: bool,
}

impl ExecutionResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_spec_new() {
        let spec = RenameSpec::new(
            PathBuf::from("/tv/Show.S01E02.720p"),
            "Show Season 1 Episode 2",
            Some("Show Season 1"),
        );

        assert_eq!(spec.old_name(), "Show.S01E02.720p");
        assert_eq!(spec.new_name(), "Show Season 1 Episode 2");
        assert_eq!(spec.new_path, PathBuf::from("/tv/Show Season 1 Episode 2"));
        assert_eq!(spec.main_folder, Some("show season 1".to_string()));
        assert!(!spec.is_noop());
    }

    #[test]
    fn test_rename_spec_noop() {
        let spec = RenameSpec::new(
            PathBuf::from("/tv/Show Season 1 Episode 2"),
            "Show Season 1 Episode 2",
            None,
        );

        assert!(spec.is_noop());
        assert!(spec.main_folder.is_none());
    }

    #[test]
    fn test_plan_execution_order_is_reversed() {
        let mut plan = RenamePlan::new();
        assert!(plan.is_empty());

        plan.push(RenameSpec::new(PathBuf::from("/tv/A S01E01"), "A Season 1 Episode 1", None));
        plan.push(RenameSpec::new(
            PathBuf::from("/tv/A S01E01/B S01E02"),
            "B Season 1 Episode 2",
            None,
        ));

        let order: Vec<String> = plan.execution_order().map(|s| s.old_name()).collect();
        assert_eq!(order, vec!["B S01E02", "A S01E01"]);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_main_folder_index_last_writer_wins() {
        let mut index = MainFolderIndex::new();
        index.insert("show season 1".to_string(), PathBuf::from("/tv/a/Show Season 1"));
        index.insert("show season 1".to_string(), PathBuf::from("/tv/b/Show Season 1"));

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get("show season 1"),
            Some(Path::new("/tv/b/Show Season 1"))
        );
    }

    #[test]
    fn test_main_folder_index_lookup() {
        let mut index = MainFolderIndex::new();
        index.insert("show season 1".to_string(), PathBuf::from("/tv/Show Season 1"));

        let spec = RenameSpec::new(PathBuf::from("/tv/Show.S01E02"), "Show Season 1 Episode 2", Some("Show Season 1"));
        assert_eq!(index.lookup(&spec), Some(Path::new("/tv/Show Season 1")));

        let orphan = RenameSpec::new(PathBuf::from("/tv/Other.S01E02"), "Other Season 1 Episode 2", None);
        assert!(index.lookup(&orphan).is_none());
    }
}
