//! Command-line interface argument parsing
//!
//! clap's built-in `-h` is replaced by our own flag: asking for help prints
//! the usage text to stderr and exits with a failure status.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Gather information about directory trees. If no path is given, the current
/// directory is analyzed.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dirtree")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Print the directory tree
    #[arg(short = 't')]
    pub tree: bool,

    /// Print summary of directories (total number of files, total file size, etc)
    #[arg(short = 's')]
    pub summary: bool,

    /// Print detailed information for each file. Turns on tree view.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Print this help
    #[arg(short = 'h')]
    pub help: bool,

    /// List of space-separated paths. Default is the current directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Rendered usage and option help
pub fn usage() -> String {
    Args::command().render_help().to_string()
}
