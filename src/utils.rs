use std::ffi::OsStr;

use chrono::{DateTime, Local};

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Renders raw mode bits the way `ls -l` does, e.g. `drwxr-xr-x`.
pub fn mode_string(mode: u32) -> String {
    let mut out = String::with_capacity(10);

    out.push(match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        S_IFBLK => 'b',
        S_IFCHR => 'c',
        _ => '-',
    });

    // (read bit, write bit, exec bit, special bit, special char)
    let triads = [
        (0o400, 0o200, 0o100, S_ISUID, 's'),
        (0o040, 0o020, 0o010, S_ISGID, 's'),
        (0o004, 0o002, 0o001, S_ISVTX, 't'),
    ];

    for (r, w, x, special, c) in triads {
        out.push(if mode & r != 0 { 'r' } else { '-' });
        out.push(if mode & w != 0 { 'w' } else { '-' });
        out.push(match (mode & x != 0, mode & special != 0) {
            (true, true) => c,
            (false, true) => c.to_ascii_uppercase(),
            (true, false) => 'x',
            (false, false) => '-',
        });
    }

    out
}

pub fn format_mtime(time: &DateTime<Local>) -> String {
    time.format("%b %e %H:%M:%S").to_string()
}
