use std::{
    cmp::Ordering,
    fs::{self, DirEntry},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{cli::DisplayOptions, entry::DirectoryEntry, error::ListError, utils::is_hidden};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    ModTime,
}

impl SortKey {
    pub fn for_options(options: &DisplayOptions) -> SortKey {
        if options.sort_by_mtime {
            SortKey::ModTime
        } else {
            SortKey::Name
        }
    }

    /// Names compare as raw `OsStr`, which is byte order on unix.
    pub fn compare(&self, a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::ModTime => a.modified.cmp(&b.modified),
        }
    }
}

pub struct Lister {
    options: DisplayOptions,
    sort_key: SortKey,
}

impl Lister {
    pub fn new(options: DisplayOptions) -> Lister {
        Lister {
            options,
            sort_key: SortKey::for_options(&options),
        }
    }

    /// Lists every path in order, or `.` when none are given. Only output
    /// failures are returned; filesystem errors are printed and skipped.
    pub fn list_all<W: Write>(&self, paths: &[PathBuf], out: &mut W) -> io::Result<()> {
        if paths.is_empty() {
            return self.list(Path::new("."), out);
        }

        for path in paths {
            self.list(path, out)?;
        }

        Ok(())
    }

    pub fn list<W: Write>(&self, path: &Path, out: &mut W) -> io::Result<()> {
        debug!(path = %path.display(), "listing directory");

        match fs::read_dir(path) {
            Ok(dir) => self.list_dir(path, dir, out),
            Err(source) => report(
                out,
                ListError::ReadDir {
                    path: path.display().to_string(),
                    source,
                },
            ),
        }
    }

    fn list_dir<W, I>(&self, path: &Path, dir: I, out: &mut W) -> io::Result<()>
    where
        W: Write,
        I: IntoIterator<Item = io::Result<DirEntry>>,
    {
        let entries = self.collect_entries(path, dir, out)?;

        for entry in entries.iter() {
            if self.options.long_format {
                writeln!(out, "{}", entry.long_line())?;
            } else {
                write!(out, "{}", entry.short_cell())?;
            }

            if self.options.recursive && entry.is_dir() {
                writeln!(out)?;
                self.list(&path.join(&entry.name), out)?;
            }
        }

        writeln!(out)?;

        Ok(())
    }

    /// Filters and orders the entries of one directory. Entries whose
    /// metadata cannot be read are reported and left out.
    fn collect_entries<W, I>(&self, path: &Path, dir: I, out: &mut W) -> io::Result<Vec<DirectoryEntry>>
    where
        W: Write,
        I: IntoIterator<Item = io::Result<DirEntry>>,
    {
        let mut entries = Vec::new();
        for dir_entry in dir {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(source) => {
                    report(
                        out,
                        ListError::Metadata {
                            path: path.display().to_string(),
                            source,
                        },
                    )?;
                    continue;
                }
            };

            let name = dir_entry.file_name();
            if !self.options.show_hidden && is_hidden(&name) {
                continue;
            }

            match DirectoryEntry::read(&dir_entry) {
                Ok(entry) => entries.push(entry),
                Err(source) => report(
                    out,
                    ListError::Metadata {
                        path: path.join(&name).display().to_string(),
                        source,
                    },
                )?,
            }
        }

        entries.sort_by(|a, b| self.sort_key.compare(a, b));

        if self.options.reverse {
            entries.reverse();
        }

        Ok(entries)
    }
}

fn report<W: Write>(out: &mut W, err: ListError) -> io::Result<()> {
    debug!(path = err.path(), error = %err, "skipping");
    writeln!(out, "{}", err)
}
