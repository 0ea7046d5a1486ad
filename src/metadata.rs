//! Per-entry metadata lookups
//!
//! Entries are always inspected with `lstat` semantics: a symbolic link is
//! reported as a link, never as whatever it points to.

use crate::error::IdentityKind;
use crate::{Error, Result};
use std::collections::HashMap;
use std::ffi::{CStr, OsStr, OsString};
use std::fs::{self, FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;

/// Classification of a filesystem object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    CharDevice,
    BlockDevice,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Classify a file type without following links
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::Regular
        } else if ft.is_fifo() {
            EntryKind::Fifo
        } else if ft.is_char_device() {
            EntryKind::CharDevice
        } else if ft.is_block_device() {
            EntryKind::BlockDevice
        } else if ft.is_socket() {
            EntryKind::Socket
        } else {
            EntryKind::Unknown
        }
    }

    /// Single-character tag shown in the verbose type column
    pub fn type_tag(self) -> char {
        match self {
            EntryKind::Regular => ' ',
            EntryKind::Directory => 'd',
            EntryKind::CharDevice => 'c',
            EntryKind::Symlink => 'l',
            EntryKind::Fifo => 'f',
            EntryKind::BlockDevice => 'b',
            EntryKind::Socket => 's',
            EntryKind::Unknown => '?',
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// Snapshot of one directory entry, taken while it is being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryView {
    /// Entry name (not full path)
    pub name: OsString,
    pub kind: EntryKind,
    /// Size in bytes
    pub size: u64,
    /// Number of 512-byte blocks allocated
    pub blocks: u64,
    /// Owner id, `None` if the entry could not be stat'd
    pub uid: Option<u32>,
    /// Group id, `None` if the entry could not be stat'd
    pub gid: Option<u32>,
}

impl DirEntryView {
    /// Build a view from metadata obtained with `symlink_metadata`
    pub fn from_metadata(name: &OsStr, metadata: &Metadata) -> Self {
        Self {
            name: name.to_os_string(),
            kind: EntryKind::from_file_type(metadata.file_type()),
            size: metadata.size(),
            blocks: metadata.blocks(),
            uid: Some(metadata.uid()),
            gid: Some(metadata.gid()),
        }
    }

    /// Stat `path` without following links.
    ///
    /// If the entry disappeared or cannot be stat'd, the kind reported by the
    /// enumerator is kept and size and blocks are zero.
    pub fn lstat(path: &Path, name: &OsStr, fallback: EntryKind) -> Self {
        match fs::symlink_metadata(path) {
            Ok(metadata) => Self::from_metadata(name, &metadata),
            Err(e) => {
                log::warn!("Cannot stat {:?}: {}", path, e);
                Self {
                    name: name.to_os_string(),
                    kind: fallback,
                    size: 0,
                    blocks: 0,
                    uid: None,
                    gid: None,
                }
            }
        }
    }

    /// Name as shown in the listing
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Resolves numeric owner and group ids to names, caching every answer.
///
/// A failed lookup means the identity database is unusable, so it is
/// returned as a fatal [`Error::IdentityError`].
#[derive(Debug, Default)]
pub struct IdentityResolver {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// User name for `uid`
    pub fn user(&mut self, uid: u32) -> Result<&str> {
        if !self.users.contains_key(&uid) {
            let name = lookup_user(uid)?;
            self.users.insert(uid, name);
        }
        Ok(self.users[&uid].as_str())
    }

    /// Group name for `gid`
    pub fn group(&mut self, gid: u32) -> Result<&str> {
        if !self.groups.contains_key(&gid) {
            let name = lookup_group(gid)?;
            self.groups.insert(gid, name);
        }
        Ok(self.groups[&gid].as_str())
    }

    /// `(user, group)` pair for an entry; unknown ids render as `?`
    pub fn owner_of(&mut self, view: &DirEntryView) -> Result<(String, String)> {
        let user = match view.uid {
            Some(uid) => self.user(uid)?.to_string(),
            None => "?".to_string(),
        };
        let group = match view.gid {
            Some(gid) => self.group(gid)?.to_string(),
            None => "?".to_string(),
        };
        Ok((user, group))
    }
}

/// Initial buffer size for the reentrant passwd/group calls
fn initial_buffer_len(name: libc::c_int) -> usize {
    let len = unsafe { libc::sysconf(name) };
    if len > 0 {
        len as usize
    } else {
        1024
    }
}

fn lookup_user(uid: u32) -> Result<String> {
    let mut buf = vec![0 as libc::c_char; initial_buffer_len(libc::_SC_GETPW_R_SIZE_MAX)];
    // SAFETY: passwd is a plain C struct, all-zero is a valid value for it
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut found: *mut libc::passwd = std::ptr::null_mut();

    loop {
        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut found)
        };
        if rc == libc::ERANGE {
            let len = buf.len() * 2;
            buf.resize(len, 0);
            continue;
        }
        if rc != 0 || found.is_null() || pwd.pw_name.is_null() {
            return Err(Error::identity(IdentityKind::User, uid, rc));
        }
        // SAFETY: pw_name points into `buf`, which is still alive
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

fn lookup_group(gid: u32) -> Result<String> {
    let mut buf = vec![0 as libc::c_char; initial_buffer_len(libc::_SC_GETGR_R_SIZE_MAX)];
    // SAFETY: group is a plain C struct, all-zero is a valid value for it
    let mut grp: libc::group = unsafe { std::mem::zeroed() };
    let mut found: *mut libc::group = std::ptr::null_mut();

    loop {
        let rc = unsafe {
            libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut found)
        };
        if rc == libc::ERANGE {
            let len = buf.len() * 2;
            buf.resize(len, 0);
            continue;
        }
        if rc != 0 || found.is_null() || grp.gr_name.is_null() {
            return Err(Error::identity(IdentityKind::Group, gid, rc));
        }
        // SAFETY: gr_name points into `buf`, which is still alive
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}
