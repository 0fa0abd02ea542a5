// ============================================================================
// flatprobe-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias shared with the core library
//
// The CLI has no failure modes of its own beyond those in CoreError, so it
// reuses the core error type and prints it once at the top level.

use flatprobe_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;
