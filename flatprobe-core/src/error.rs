// ============================================================================
// flatprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the flatprobe core library
//
// Parsing never fails; every variant here belongs to the plumbing around it
// (locating ffprobe, running it, reading its captured output).

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for flatprobe
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required external tool '{0}' was not found in PATH")]
    DependencyNotFound(String),

    #[error("Configured ffprobe executable not found: {}", .0.display())]
    ConfiguredToolNotFound(PathBuf),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Error when reading file '{}' with ffprobe: {stderr}", path.display())]
    ProbeFailed { path: PathBuf, stderr: String },

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for flatprobe operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
