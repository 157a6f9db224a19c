//! Progress output for user-facing status updates.
//!
//! Diagnostics go through tracing; this module prints the colored lines a
//! user watches while a tree is planned and renamed.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stderr()),
            colors_enabled: should_use_colors(),
        }
    }

    /// Create a progress reporter with a custom writer
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            colors_enabled: false,
        }
    }

    /// Report the start of the directory walk
    pub fn scan_start(&mut self, root: &Path) {
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Scanning {}", root.display()).bold()
            );
        } else {
            let _ = writeln!(self.writer, "Scanning {}", root.display());
        }
    }

    /// Report what the walk found
    pub fn plan_complete(&mut self, renames: usize, main_folders: usize) {
        let message = format!(
            "{} directories to rename, {} season folders found",
            renames, main_folders
        );
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", message.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", message);
        }
    }

    /// Report a single rename before it is applied
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &Path, to: &Path) {
        let counter = format!("[{}/{}]", current, total);
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} Old path: {}",
                counter.dimmed(),
                from.display().to_string().cyan()
            );
            let _ = writeln!(
                self.writer,
                "{} New path: {}",
                " ".repeat(counter.len()),
                to.display().to_string().magenta()
            );
        } else {
            let _ = writeln!(self.writer, "{} Old path: {}", counter, from.display());
            let _ = writeln!(
                self.writer,
                "{} New path: {}",
                " ".repeat(counter.len()),
                to.display()
            );
        }
    }

    /// Report the season folder a renamed episode belongs to
    pub fn main_folder(&mut self, path: &Path) {
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Main folder: {}", path.display()).green()
            );
        } else {
            let _ = writeln!(self.writer, "Main folder: {}", path.display());
        }
    }

    /// Report a rename that could not be applied (non-fatal)
    pub fn rename_failed(&mut self, message: &str) {
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Unable to rename directory: {}", message).red()
            );
        } else {
            let _ = writeln!(self.writer, "Unable to rename directory: {}", message);
        }
    }
}
