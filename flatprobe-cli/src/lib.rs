// flatprobe-cli/src/lib.rs
//
// Library portion of the flatprobe CLI application.
// Contains argument definitions, rendering and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::probe::{RenderOptions, run_probe, run_with_executor};
