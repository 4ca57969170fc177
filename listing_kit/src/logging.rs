//! Logging setup
//!
//! Logs go to stderr through `env_logger` so stdout carries only the JSON
//! line. `RUST_LOG` overrides the level picked from command-line flags.

/// Requested log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// One step more detail per level: info, debug, trace
    Verbose(u8),
}

impl Verbosity {
    /// Build from `--quiet` and the number of `-v` occurrences
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose == 0 {
            Verbosity::Normal
        } else {
            Verbosity::Verbose(verbose)
        }
    }

    /// Filter directive understood by `env_logger`
    pub fn filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose(1) => "info",
            Verbosity::Verbose(2) => "debug",
            Verbosity::Verbose(_) => "trace",
        }
    }
}

/// Install the global logger
///
/// Fails if a logger was already installed.
pub fn init_logging(verbosity: Verbosity) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(verbosity.filter()))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
}
