//! dirtree - list directory trees with metadata and summary statistics
//!
//! This crate recursively walks one or more directory trees and prints either
//! a branch-glyph tree or an indented listing of every entry, optionally with
//! owner, group, size, block count and type, plus per-path and overall
//! summaries.
//!
//! # Features
//!
//! - **Deterministic order**: directories first, then byte-wise by name
//! - **No link following**: symbolic links are listed as links
//! - **Error tolerant**: unreadable directories are reported inline
//! - **Summaries**: counts of files, directories, links, pipes and sockets
//! - **Configuration**: default flags from `~/.dirtree.toml`

pub mod cli;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod formatter;
pub mod metadata;
pub mod prefix;
pub mod sort;
pub mod stats;
pub mod walker;

pub use cli::Args;
pub use config::{Config, TraversalConfig};
pub use error::{Error, Result};
pub use metadata::{DirEntryView, EntryKind};
pub use stats::Summary;
pub use walker::Walker;

use std::io::Write;
use std::path::PathBuf;

/// Default path when none is given
pub const CURRENT_DIR: &str = ".";

/// Resolve the paths to analyze: the current directory if none were given,
/// and at most `max_paths` of them. Every ignored path gets a warning line
/// on `out`.
pub fn resolve_paths<W: Write>(
    paths: &[PathBuf],
    max_paths: usize,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Ok(vec![PathBuf::from(CURRENT_DIR)]);
    }

    let mut accepted = Vec::with_capacity(paths.len().min(max_paths));
    for path in paths {
        if accepted.len() < max_paths {
            accepted.push(path.clone());
        } else {
            log::warn!("Ignoring {:?}: more than {} paths", path, max_paths);
            writeln!(
                out,
                "Warning: maximum number of directories exceeded, ignoring '{}'.",
                path.display()
            )?;
        }
    }
    Ok(accepted)
}

/// Main entry point for the dirtree listing
///
/// Walks every path in `args` (or the current directory), writing the
/// listing, per-path summaries and the grand total to `out`. Returns the
/// grand total over all paths.
///
/// # Example
///
/// ```no_run
/// use dirtree::{run, Args, Config};
///
/// let args = Args { tree: true, summary: true, ..Default::default() };
/// run(&args, &Config::default(), std::io::stdout()).unwrap();
/// ```
pub fn run<W: Write>(args: &Args, config: &Config, mut out: W) -> Result<Summary> {
    let traversal = TraversalConfig::from_args_and_config(args, config);
    log::debug!("Traversal flags: {:#x}", traversal.bits());

    let paths = resolve_paths(&args.paths, config.limits.max_paths, &mut out)?;
    let mut walker = Walker::new(&traversal, out);
    let mut total = Summary::new();

    for path in &paths {
        if traversal.summary {
            formatter::write_header(walker.out(), traversal.verbose)?;
        }
        writeln!(walker.out(), "{}", path.display())?;

        let stats = walker.walk_root(path)?;
        total += &stats;

        if traversal.summary {
            formatter::write_summary(walker.out(), &stats, traversal.verbose)?;
        }
    }

    if traversal.summary && paths.len() > 1 {
        formatter::write_grand_total(walker.out(), paths.len(), &total, traversal.verbose)?;
    }

    walker.out().flush()?;
    Ok(total)
}
