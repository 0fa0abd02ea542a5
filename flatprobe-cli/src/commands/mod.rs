//! Command implementations for the CLI.

/// Probes one media file and prints its report.
pub mod probe;
