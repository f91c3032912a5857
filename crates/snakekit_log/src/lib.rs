//! `snakekit_log` v1:
//! Logging bootstrap for snakekit front-ends.
//!
//! Library crates only use the `log` facade; binaries call [`init_logging`]
//! once at startup. Records go to stderr so stdout stays free for console
//! output.

use log::LevelFilter;

/// Log verbosity requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumLogVerbosity {
    /// Warnings and errors only.
    Quiet,
    /// Run start/finish and warnings.
    #[default]
    Normal,
    /// Per-entry rename decisions.
    Verbose,
    /// Everything, including dependency chatter.
    Trace,
}

impl EnumLogVerbosity {
    /// Map `-q` / repeated `-v` flags to a verbosity.
    pub fn from_flags(if_quiet: bool, n_verbose: u8) -> Self {
        if if_quiet {
            return Self::Quiet;
        }
        match n_verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Warn,
            Self::Normal => LevelFilter::Info,
            Self::Verbose => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Default filter string handed to `env_logger` when `RUST_LOG` is unset.
///
/// Below trace level only targets starting with `snakekit` (the binary and
/// the `snakekit_*` libraries) log at the chosen level.
pub fn derive_default_filter(verbosity: EnumLogVerbosity) -> String {
    let c_level = verbosity.level_filter().as_str().to_lowercase();
    match verbosity {
        EnumLogVerbosity::Trace => c_level,
        _ => format!("warn,snakekit={c_level}"),
    }
}

/// Install the global `env_logger` logger.
///
/// `RUST_LOG` overrides the verbosity-derived default. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_logging(verbosity: EnumLogVerbosity) {
    let c_filter = derive_default_filter(verbosity);
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(c_filter))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
