//! Sibling ordering
//!
//! Directories come first, then everything else; each group is ordered by
//! byte-wise name comparison. Applied once per directory level.

use crate::enumerate::RawEntry;
use std::cmp::Ordering;
use std::os::unix::ffi::OsStrExt;

/// Compare two entries of the same directory
pub fn compare_entries(a: &RawEntry, b: &RawEntry) -> Ordering {
    match (a.kind.is_dir(), b.kind.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.as_bytes().cmp(b.name.as_bytes()),
    }
}

/// Sort one directory level in place
pub fn sort_entries(entries: &mut [RawEntry]) {
    entries.sort_by(compare_entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::EntryKind;

    fn names(entries: &[RawEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.name.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_directories_first() {
        let mut entries = vec![
            RawEntry::new("a.txt", EntryKind::Regular),
            RawEntry::new("b", EntryKind::Directory),
            RawEntry::new("0link", EntryKind::Symlink),
            RawEntry::new("z", EntryKind::Directory),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["b", "z", "0link", "a.txt"]);
    }

    #[test]
    fn test_case_sensitive_order() {
        let mut entries = vec![
            RawEntry::new("beta", EntryKind::Regular),
            RawEntry::new("Alpha", EntryKind::Regular),
            RawEntry::new("alpha", EntryKind::Regular),
            RawEntry::new("Beta", EntryKind::Regular),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["Alpha", "Beta", "alpha", "beta"]);
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let base = vec![
            RawEntry::new("c", EntryKind::Fifo),
            RawEntry::new("a", EntryKind::Directory),
            RawEntry::new("b", EntryKind::Regular),
            RawEntry::new("d", EntryKind::Directory),
        ];
        let mut forward = base.clone();
        let mut backward: Vec<_> = base.into_iter().rev().collect();
        sort_entries(&mut forward);
        sort_entries(&mut backward);
        assert_eq!(forward, backward);
    }
}
