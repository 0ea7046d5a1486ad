//! Recursive directory walker
//!
//! Depth-first walk of one root path. Each level is read completely, sorted,
//! and then rendered entry by entry; subdirectories are walked right after
//! their own line. A directory that cannot be opened becomes a single inline
//! `ERROR:` line and the walk goes on with its siblings. Symbolic links are
//! listed but never followed.

use crate::config::TraversalConfig;
use crate::enumerate::{read_entries, DirError};
use crate::formatter;
use crate::metadata::{DirEntryView, IdentityResolver};
use crate::prefix::child_prefix;
use crate::sort::sort_entries;
use crate::stats::Summary;
use crate::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Walks directory trees and writes their listing to `out`
pub struct Walker<'a, W: Write> {
    config: &'a TraversalConfig,
    out: W,
    identities: IdentityResolver,
}

impl<'a, W: Write> Walker<'a, W> {
    pub fn new(config: &'a TraversalConfig, out: W) -> Self {
        Self {
            config,
            out,
            identities: IdentityResolver::new(),
        }
    }

    /// Writer the listing goes to
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Walk everything below `root` and return its statistics. The root
    /// itself is not counted.
    pub fn walk_root(&mut self, root: &Path) -> Result<Summary> {
        log::debug!("Starting traversal at: {:?}", root);
        let mut stats = Summary::new();
        self.walk_dir(root, "", &mut stats)?;
        Ok(stats)
    }

    /// Render one directory level below `prefix` and recurse into its
    /// subdirectories, accumulating into `stats`.
    ///
    /// Only fatal conditions are returned as errors; an unreadable directory
    /// is rendered and reported as success.
    pub fn walk_dir(&mut self, dir: &Path, prefix: &str, stats: &mut Summary) -> Result<()> {
        let dir = with_trailing_separator(dir);
        let tree = self.config.tree_view();

        let listing = match read_entries(&dir) {
            Ok(listing) => listing,
            Err(DirError::OutOfMemory) => return Err(Error::OutOfMemory),
            Err(err) => {
                log::debug!("Cannot open {:?}: {}", dir, err);
                let line = formatter::error_line(&child_prefix(tree, true, prefix), &err);
                writeln!(self.out, "{}", line)?;
                return Ok(());
            }
        };

        for err in &listing.errors {
            log::warn!("Error reading {:?}: {}", dir, err);
        }

        let mut entries = listing.entries;
        sort_entries(&mut entries);
        log::debug!("{:?}: {} entries", dir, entries.len());

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let path = dir.join(&entry.name);
            let entry_prefix = child_prefix(tree, i + 1 == count, prefix);
            let view = DirEntryView::lstat(&path, &entry.name, entry.kind);

            self.render_entry(&entry_prefix, &view)?;
            stats.record(&view);

            if view.kind.is_dir() {
                self.walk_dir(&path, &entry_prefix, stats)?;
            }
        }

        Ok(())
    }

    fn render_entry(&mut self, prefix: &str, view: &DirEntryView) -> Result<()> {
        let verbose = self.config.verbose;
        let mut line = formatter::name_field(prefix, &view.display_name(), verbose);

        if verbose {
            let (user, group) = self.identities.owner_of(view)?;
            line.push_str(&formatter::verbose_columns(
                &user,
                &group,
                view.size,
                view.blocks,
                view.kind.type_tag(),
            ));
        }

        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

/// `dir` with a `/` appended unless it already ends in one
fn with_trailing_separator(dir: &Path) -> PathBuf {
    let raw = dir.as_os_str();
    if raw.as_bytes().last() == Some(&b'/') {
        return dir.to_path_buf();
    }
    let mut owned = OsString::with_capacity(raw.len() + 1);
    owned.push(raw);
    owned.push(OsStr::new("/"));
    PathBuf::from(owned)
}
