//! Command-line interface parsing

use std::ffi::OsString;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};

use crate::config::ListConfig;

/// List plugin modules and print them as a JSON-encoded array to stdout
#[derive(Debug, Parser)]
#[command(name = "ls_plugins", version)]
#[command(after_help = "EXIT CODES:\n    0    Entries printed\n    1    Directory could not be listed\n    2    Usage error")]
pub struct Cli {
    /// Base directory to list
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub path: String,

    /// Print entries in lexicographic order
    #[arg(long)]
    pub sort: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse command-line arguments into a run configuration
///
/// Help and version requests also come back as `Err`; `clap::Error::exit`
/// prints them to the right stream with the right exit code.
pub fn parse_args<I, T>(args: I) -> Result<ListConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(ListConfig::from)
}
