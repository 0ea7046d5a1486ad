//! Summary statistics
//!
//! One [`Summary`] is threaded through the whole walk of a root path; the
//! driver adds each finished root into a grand total.

use crate::metadata::{DirEntryView, EntryKind};
use std::ops::AddAssign;

/// Counts by entry kind plus size and block totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of directories
    pub dirs: u64,
    /// Number of regular files
    pub files: u64,
    /// Number of symbolic links
    pub links: u64,
    /// Number of named pipes
    pub fifos: u64,
    /// Number of sockets
    pub socks: u64,
    /// Total size in bytes
    pub size: u64,
    /// Total number of 512-byte blocks
    pub blocks: u64,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one entry. Devices and unknown kinds only add to the
    /// size and block totals.
    pub fn record(&mut self, entry: &DirEntryView) {
        match entry.kind {
            EntryKind::Regular => self.files += 1,
            EntryKind::Directory => self.dirs += 1,
            EntryKind::Symlink => self.links += 1,
            EntryKind::Fifo => self.fifos += 1,
            EntryKind::Socket => self.socks += 1,
            EntryKind::CharDevice | EntryKind::BlockDevice | EntryKind::Unknown => {}
        }
        self.size += entry.size;
        self.blocks += entry.blocks;
    }

    /// Sum of the five kind counters
    pub fn counted(&self) -> u64 {
        self.dirs + self.files + self.links + self.fifos + self.socks
    }

    /// "N files, N directories, N links, N pipes, and N sockets"
    pub fn sentence(&self) -> String {
        format!(
            "{} {}, {} {}, {} {}, {} {}, and {} {}",
            self.files,
            plural(self.files, "file", "files"),
            self.dirs,
            plural(self.dirs, "directory", "directories"),
            self.links,
            plural(self.links, "link", "links"),
            self.fifos,
            plural(self.fifos, "pipe", "pipes"),
            self.socks,
            plural(self.socks, "socket", "sockets"),
        )
    }
}

impl AddAssign<&Summary> for Summary {
    fn add_assign(&mut self, other: &Summary) {
        self.dirs += other.dirs;
        self.files += other.files;
        self.links += other.links;
        self.fifos += other.fifos;
        self.socks += other.socks;
        self.size += other.size;
        self.blocks += other.blocks;
    }
}

fn plural(n: u64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
