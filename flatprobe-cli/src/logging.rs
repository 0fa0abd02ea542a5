// ============================================================================
// flatprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger backend for the `log` facade
//
// Log records go to stderr so that stdout only carries the report. The
// default level is INFO (or FLATPROBE_LOG_LEVEL), --verbose raises it to
// DEBUG, and RUST_LOG directives are applied on top when set.

use log::LevelFilter;
use std::io::Write;

/// Picks the effective log level from the verbose flag and configured name.
///
/// Unknown level names fall back to INFO.
pub fn resolve_level(verbose: bool, configured: &str) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    configured.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Initialize the logger with a specific log level
pub fn init_with_level(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "[{}] {}", level_str, record.args())
        })
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("Logger initialized with level: {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_level() {
        assert_eq!(resolve_level(true, "error"), LevelFilter::Debug);
        assert_eq!(resolve_level(false, "warn"), LevelFilter::Warn);
        assert_eq!(resolve_level(false, "TRACE"), LevelFilter::Trace);
        assert_eq!(resolve_level(false, " debug "), LevelFilter::Debug);
        assert_eq!(resolve_level(false, "loud"), LevelFilter::Info);
    }
}
