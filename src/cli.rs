use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "showfold")]
#[command(author, version, about, long_about = None)]
#[command(about = "Normalize TV show season and episode directory names")]
pub struct Args {
    /// Directory tree to process (must be inside your home directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Log every token while building names (implies --debug)
    #[arg(long)]
    pub splits: bool,

    /// Show planned renames without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,
}

impl Args {
    pub fn debug_enabled(&self) -> bool {
        self.debug || self.splits
    }
}
