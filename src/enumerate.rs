//! Directory enumeration
//!
//! Reads one directory level into memory. Failing to open the directory is
//! reported as a [`DirError`] for the caller to render; read errors after a
//! successful open are collected and enumeration carries on.

use crate::metadata::EntryKind;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// One raw directory entry: its name and the kind reported by the directory
/// stream (links are not followed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl RawEntry {
    pub fn new<N: Into<OsString>>(name: N, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Everything read from one directory level
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<RawEntry>,
    /// Read errors hit after the directory was opened
    pub errors: Vec<io::Error>,
}

/// Why a directory could not be opened for enumeration
#[derive(Debug)]
pub enum DirError {
    PermissionDenied,
    NotFound,
    NotADirectory,
    OutOfMemory,
    Other(io::Error),
}

impl DirError {
    /// Classify the error returned by opening a directory
    pub fn from_io(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(libc::EACCES) | Some(libc::EPERM) => DirError::PermissionDenied,
            Some(libc::ENOENT) => DirError::NotFound,
            Some(libc::ENOTDIR) => DirError::NotADirectory,
            Some(libc::ENOMEM) => DirError::OutOfMemory,
            _ => match err.kind() {
                io::ErrorKind::PermissionDenied => DirError::PermissionDenied,
                io::ErrorKind::NotFound => DirError::NotFound,
                io::ErrorKind::OutOfMemory => DirError::OutOfMemory,
                _ => DirError::Other(err),
            },
        }
    }
}

impl fmt::Display for DirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirError::PermissionDenied => f.write_str("Permission denied"),
            DirError::NotFound => f.write_str("No such file or directory"),
            DirError::NotADirectory => f.write_str("Not a directory"),
            DirError::OutOfMemory => f.write_str("Out of memory"),
            DirError::Other(err) => match err.raw_os_error() {
                Some(code) => write!(f, "{}", errno::Errno(code)),
                None => write!(f, "{}", err),
            },
        }
    }
}

/// Read all entries of `dir`, skipping `.` and `..`
pub fn read_entries(dir: &Path) -> Result<Listing, DirError> {
    let stream = fs::read_dir(dir).map_err(DirError::from_io)?;
    let mut listing = Listing::default();

    for entry in stream {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                listing.errors.push(e);
                continue;
            }
        };

        let name = entry.file_name();
        if name == "." || name == ".." {
            continue;
        }

        let kind = match entry.file_type() {
            Ok(ft) => EntryKind::from_file_type(ft),
            Err(e) => {
                log::debug!("No file type for {:?}: {}", entry.path(), e);
                EntryKind::Unknown
            }
        };
        listing.entries.push(RawEntry { name, kind });
    }

    Ok(listing)
}
