use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// List directories recursively
    #[clap(short = 'R', long)]
    pub recursive: bool,

    /// Use long listing format
    #[clap(short, long = "long")]
    pub long_format: bool,

    /// Show hidden files
    #[clap(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Reverse order while sorting
    #[clap(short, long)]
    pub reverse: bool,

    /// Sort by modification time
    #[clap(short = 't', long = "time")]
    pub sort_by_mtime: bool,

    /// Directories to list
    #[clap(parse(from_os_str))]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub recursive: bool,
    pub long_format: bool,
    pub show_hidden: bool,
    pub reverse: bool,
    pub sort_by_mtime: bool,
}

impl From<&Args> for DisplayOptions {
    fn from(args: &Args) -> Self {
        DisplayOptions {
            recursive: args.recursive,
            long_format: args.long_format,
            show_hidden: args.show_hidden,
            reverse: args.reverse,
            sort_by_mtime: args.sort_by_mtime,
        }
    }
}

pub fn get_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn no_flags_no_paths() {
        let args = parse(&["dir-list"]);
        assert_eq!(DisplayOptions::from(&args), DisplayOptions::default());
        assert!(args.paths.is_empty());
    }

    #[test]
    fn combined_short_flags() {
        let args = parse(&["dir-list", "-lRa", "-rt", "src", "/tmp"]);
        assert_eq!(
            DisplayOptions::from(&args),
            DisplayOptions {
                recursive: true,
                long_format: true,
                show_hidden: true,
                reverse: true,
                sort_by_mtime: true,
            }
        );
        assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("/tmp")]);
    }

    #[test]
    fn upper_and_lower_r_are_distinct() {
        let options = DisplayOptions::from(&parse(&["dir-list", "-r"]));
        assert!(options.reverse);
        assert!(!options.recursive);

        let options = DisplayOptions::from(&parse(&["dir-list", "-R"]));
        assert!(options.recursive);
        assert!(!options.reverse);
    }

    #[test]
    fn long_aliases() {
        let args = parse(&["dir-list", "--long", "--all", "--time", "--reverse", "--recursive"]);
        let options = DisplayOptions::from(&args);
        assert!(options.long_format && options.show_hidden && options.sort_by_mtime);
        assert!(options.reverse && options.recursive);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["dir-list", "-x"]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_accepted() {
        use std::{ffi::OsString, os::unix::ffi::OsStringExt};

        let raw = OsString::from_vec(b"bad\xffdir".to_vec());
        let args = Args::try_parse_from([OsString::from("dir-list"), raw.clone()]).unwrap();
        assert_eq!(args.paths, vec![PathBuf::from(raw)]);
    }
}
