use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::DateSource;

/// Each flag falls back to its SCOOTER_* environment variable, then to the default.
///
/// Switches take an optional `=value` so that an explicit `--dry-run=false`
/// can override `SCOOTER_DRY_RUN`.
#[derive(Parser, Debug)]
#[command(name = "scooter")]
#[command(author, version, long_about = None)]
#[command(about = "Scoot files around by date and kind")]
pub struct Args {
    /// Directory to reorganize
    #[arg(short, long, env = "SCOOTER_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print the planned moves as CSV without touching the filesystem
    #[arg(
        short = 'n',
        long,
        env = "SCOOTER_DRY_RUN",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        value_name = "BOOL",
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Don't move directories, only files
    #[arg(
        short = 'x',
        long,
        env = "SCOOTER_EXCLUDE_DIRS",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        value_name = "BOOL",
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub exclude_dirs: bool,

    /// Log debug output to stderr
    #[arg(
        short,
        long,
        env = "SCOOTER_VERBOSE",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        value_name = "BOOL",
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Timestamp used as the date an entry was added
    #[arg(long, value_enum, env = "SCOOTER_DATE_SOURCE", default_value_t = DateSource::default())]
    pub date_source: DateSource,

    /// Write a JSON record of completed moves to this file
    #[arg(long, value_name = "PATH", env = "SCOOTER_MANIFEST")]
    pub manifest: Option<PathBuf>,
}

/// Long options that may also be spelled with a single dash (`-dry-run`).
const LONG_NAMES: &[&str] = &[
    "dir",
    "dry-run",
    "exclude-dirs",
    "verbose",
    "date-source",
    "manifest",
    "help",
    "version",
];

/// Options whose value may follow as a separate argument.
const TAKES_VALUE: &[&str] = &["-d", "--dir", "--date-source", "--manifest"];

/// Rewrite single-dash long options (`-dir x`, `-dry-run`, `-manifest=m.json`)
/// to their double-dash form so clap does not read them as clustered shorts.
///
/// Option values and everything after `--` pass through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut value_next = false;
    let mut verbatim = false;

    for arg in args {
        if verbatim || value_next {
            value_next = false;
            normalized.push(arg);
            continue;
        }

        let arg = match arg.to_str().and_then(double_dash) {
            Some(rewritten) => OsString::from(rewritten),
            None => arg,
        };

        if arg == "--" {
            verbatim = true;
        } else if let Some(s) = arg.to_str() {
            value_next = TAKES_VALUE.contains(&s);
        }
        normalized.push(arg);
    }

    normalized
}

fn double_dash(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_NAMES.contains(&name).then(|| format!("-{arg}"))
}
