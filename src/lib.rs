pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod scanner;
pub mod validator;

pub use error::{AppError, ExitCode};
pub use parser::{classify, is_hidden, Classification};
pub use rename::{
    build_name, execute_plan, plan_tree, split_tokens, BuiltName, ExecutionResult,
    MainFolderIndex, Planner, RenameOptions, RenamePlan, RenameSpec,
};
pub use scanner::{scan_tree, DirectoryEntry, ScannerError};
pub use validator::{validate_target, ValidationError};
