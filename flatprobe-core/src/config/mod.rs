//! Configuration for the flatprobe core library.
//!
//! Values come from environment variables first and can then be overridden
//! by the consumer (normally the CLI) through the builder-style setters.

mod utils;

use std::path::PathBuf;

pub use utils::{get_env_path_opt, get_env_string};

/// Environment variable naming an explicit ffprobe executable.
pub const ENV_FFPROBE_PATH: &str = "FLATPROBE_FFPROBE";

/// Environment variable holding the default log level.
pub const ENV_LOG_LEVEL: &str = "FLATPROBE_LOG_LEVEL";

/// Name of the probing tool looked up in `PATH`.
pub const FFPROBE_PROGRAM: &str = "ffprobe";

/// Default log level when neither flags nor environment set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for a probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Explicit ffprobe executable. When unset, or when a path taken from the
    /// environment does not exist, ffprobe is looked up in `PATH`.
    pub ffprobe_path: Option<PathBuf>,

    /// Set when `ffprobe_path` came from [`ProbeConfig::with_ffprobe_path`].
    /// A missing executable is then an error instead of a `PATH` fallback.
    pub ffprobe_path_required: bool,

    /// Log level name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: get_env_path_opt(ENV_FFPROBE_PATH),
            ffprobe_path_required: false,
            log_level: get_env_string(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl ProbeConfig {
    /// Creates a configuration from the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the ffprobe executable when `path` is `Some`. An overridden
    /// path must exist when ffprobe is located.
    pub fn with_ffprobe_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.ffprobe_path = path;
            self.ffprobe_path_required = true;
        }
        self
    }

    /// Sets the log level name.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
