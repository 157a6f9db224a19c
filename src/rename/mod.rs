mod executor;
mod name_builder;
mod planner;
mod types;

pub use executor::{execute_plan, RenameError, RenameOptions};
pub use name_builder::{build_name, parse_season_episode, split_tokens, strip_zero, BuiltName};
pub use planner::{plan_tree, Planner};
pub use types::{ExecutionResult, MainFolderIndex, RenameFailure, RenamePlan, RenameSpec};
