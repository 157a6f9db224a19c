use crate::rename::{ExecutionResult, MainFolderIndex, RenamePlan};
use std::io::{self, Write};

/// Display dry run results in a formatted output
pub fn display_dry_run(
    plan: &RenamePlan,
    main_folders: &MainFolderIndex,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Operations:    {}", plan.len())?;
    writeln!(writer, "Season folders: {}", main_folders.len())?;
    writeln!(writer)?;

    if plan.is_empty() {
        writeln!(writer, "No directories to rename.")?;
        return Ok(());
    }

    writeln!(writer, "Planned changes (in execution order):")?;
    writeln!(writer)?;

    for (i, spec) in plan.execution_order().enumerate() {
        writeln!(writer, "  {}. {}", i + 1, spec.old_path.display())?;
        writeln!(writer, "     From: {}", spec.old_name())?;
        writeln!(writer, "     To:   {}", spec.new_name())?;

        if let Some(main_folder) = main_folders.lookup(spec) {
            writeln!(writer, "     Main folder: {}", main_folder.display())?;
        }

        writeln!(writer)?;
    }

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  {} directories would be renamed", plan.len())?;
    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(result: &ExecutionResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;

    if result.renamed.is_empty() && !result.has_failures() {
        writeln!(writer, "No directories to rename.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "Successfully renamed {} directories.",
        result.renamed.len()
    )?;

    if result.has_failures() {
        writeln!(writer, "  {} renames failed:", result.failures.len())?;
        for failure in &result.failures {
            writeln!(writer, "    - {}", failure.message)?;
        }
    }

    Ok(())
}
