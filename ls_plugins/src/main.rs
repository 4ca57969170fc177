//! # ls_plugins
//!
//! Lists plugin modules for a CI build matrix.
//!
//! ## Usage
//!
//! ```bash
//! # Print every direct child of ./plugin as a JSON array
//! ls_plugins --path plugin
//! ["neon", "confluent", "confluent-kafka"]
//!
//! # Deterministic order
//! ls_plugins -p plugin --sort
//! ```
//!
//! Files and directories are listed alike, by name only. On any failure a
//! single diagnostic goes to stderr and nothing is printed to stdout.

mod cli;
mod config;

use std::io::{self, Write};

use config::ListConfig;
use listing_kit::{list_entries, logging, write_entries, ListingError};

const EXIT_LISTING_FAILED: i32 = 1;
const EXIT_SETUP_FAILED: i32 = 2;

fn main() {
    let config = match cli::parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    if let Err(e) = logging::init_logging(config.verbosity) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(EXIT_SETUP_FAILED);
    }

    let exit_code = match run(&config, io::stdout().lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_LISTING_FAILED
        }
    };

    std::process::exit(exit_code);
}

/// List the configured directory and write the JSON line to `writer`
fn run<W: Write>(config: &ListConfig, writer: W) -> Result<(), ListingError> {
    log::info!("Listing {} ({})", config.path.display(), config.order);

    let entries = config.order.apply(list_entries(&config.path)?);
    write_entries(writer, &entries)?;

    log::debug!("Wrote {} entries", entries.len());
    Ok(())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use listing_kit::{EntryOrder, Verbosity};
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn config_for(path: &std::path::Path, order: EntryOrder) -> ListConfig {
        ListConfig {
            path: path.to_path_buf(),
            order,
            verbosity: Verbosity::Normal,
        }
    }

    #[test]
    fn test_run_sorted() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.py")).unwrap();
        File::create(dir.path().join("a.py")).unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let mut out = Vec::new();
        run(&config_for(dir.path(), EntryOrder::Sorted), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\"a.py\", \"b.py\", \"c\"]\n"
        );
    }

    #[test]
    fn test_run_empty_directory() {
        let dir = TempDir::new().unwrap();

        let mut out = Vec::new();
        run(&config_for(dir.path(), EntryOrder::AsListed), &mut out).unwrap();

        assert_eq!(out, b"[]\n");
    }

    #[test]
    fn test_run_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("plugin");

        let mut out = Vec::new();
        let err = run(&config_for(&missing, EntryOrder::AsListed), &mut out).unwrap_err();

        assert!(err.is_invalid_path());
        assert!(out.is_empty());
    }
}
