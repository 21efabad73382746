use std::{
    ffi::OsString,
    fs::{DirEntry, Metadata},
};

use chrono::{DateTime, Local};
use colored::*;

use crate::utils::{format_mtime, mode_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    fn from_metadata(meta: &Metadata) -> EntryKind {
        let file_type = meta.file_type();
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            EntryKind::Directory => text.blue().bold(),
            EntryKind::Symlink => text.cyan().bold(),
            EntryKind::Other => text.normal(),
        }
    }
}

/// Snapshot of one directory entry, taken without following symlinks.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: OsString,
    pub kind: EntryKind,
    pub mode: u32,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
}

impl DirectoryEntry {
    pub fn read(entry: &DirEntry) -> std::io::Result<DirectoryEntry> {
        let meta = entry.metadata()?;

        DirectoryEntry::from_metadata(entry.file_name(), &meta)
    }

    pub fn from_metadata(name: OsString, meta: &Metadata) -> std::io::Result<DirectoryEntry> {
        let (mode, nlink, uid, gid) = ownership(meta);

        Ok(DirectoryEntry {
            name,
            kind: EntryKind::from_metadata(meta),
            mode,
            size: meta.len(),
            modified: DateTime::<Local>::from(meta.modified()?),
            nlink,
            uid,
            gid,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// `ls -l` style line. Only the name carries the kind's color, so the
    /// metadata columns stay plain.
    pub fn long_line(&self) -> String {
        format!(
            "{} {:>3} {:>9} {:>9} {:>12} {} {}",
            mode_string(self.mode),
            self.nlink,
            self.uid,
            self.gid,
            self.size,
            format_mtime(&self.modified),
            self.kind.paint(&self.name.to_string_lossy())
        )
    }

    pub fn short_cell(&self) -> String {
        format!("{}\t", self.kind.paint(&self.name.to_string_lossy()))
    }
}

#[cfg(unix)]
fn ownership(meta: &Metadata) -> (u32, u64, u32, u32) {
    use std::os::unix::fs::MetadataExt;

    (meta.mode(), meta.nlink(), meta.uid(), meta.gid())
}

#[cfg(not(unix))]
fn ownership(meta: &Metadata) -> (u32, u64, u32, u32) {
    let kind = if meta.is_dir() { 0o040000 } else { 0o100000 };
    let perm = if meta.permissions().readonly() { 0o444 } else { 0o644 };

    (kind | perm, 1, 0, 0)
}
