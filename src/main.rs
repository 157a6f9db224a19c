use clap::Parser;
use showfold::cli::Args;
use showfold::logging;
use showfold::output::{display_dry_run, display_execution_result};
use showfold::progress::Progress;
use showfold::{execute_plan, plan_tree, validate_target, AppError, RenameOptions};
use tracing::{debug, error, info};

fn main() {
    let args = Args::parse();

    logging::init(logging::level_for(args.debug, args.splits));

    debug!(debug = args.debug_enabled(), splits = args.splits, "Arguments parsed");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let path = args.path.as_deref().ok_or(AppError::MissingPath)?;
    let home = dirs::home_dir().ok_or(AppError::HomeUnavailable)?;

    let target = validate_target(path, &home)?;
    info!("Target directory: {:?}", target);

    let mut progress = Progress::new();

    // Step 1: Walk the tree and plan every rename
    progress.scan_start(&target);
    let (plan, main_folders) = plan_tree(&target)?;
    progress.plan_complete(plan.len(), main_folders.len());

    // Step 2: Apply the plan, deepest directories first
    let options = RenameOptions { dry_run: args.dry };
    let result = execute_plan(&plan, &main_folders, &options, &mut progress);

    // Step 3: Report
    if args.dry {
        display_dry_run(&plan, &main_folders, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    } else {
        display_execution_result(&result, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    }

    Ok(())
}
