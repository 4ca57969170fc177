//! Configuration for a listing run

use std::path::PathBuf;

use listing_kit::{EntryOrder, Verbosity};

use crate::cli::Cli;

/// Configuration for a listing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Directory whose direct children are listed
    pub path: PathBuf,

    /// Order of the emitted entries
    pub order: EntryOrder,

    /// Log verbosity on stderr
    pub verbosity: Verbosity,
}

impl From<Cli> for ListConfig {
    fn from(cli: Cli) -> Self {
        Self {
            path: PathBuf::from(cli.path),
            order: if cli.sort {
                EntryOrder::Sorted
            } else {
                EntryOrder::AsListed
            },
            verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
        }
    }
}
