//! Core library for summarising media files with ffprobe.
//!
//! ffprobe is run with `-print_format flat`, which prints one dotted
//! `section.path=value` assignment per line. This crate captures that output,
//! rebuilds the container (wrapper) attributes and the per-stream attribute
//! maps from it, and separates video streams from audio streams.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use flatprobe_core::{CommandFfprobeExecutor, ProbeConfig, probe_file};
//! use std::path::Path;
//!
//! let config = ProbeConfig::new();
//! let executor = CommandFfprobeExecutor::locate(&config).unwrap();
//! let report = probe_file(&executor, Path::new("/path/to/movie.mkv")).unwrap();
//!
//! for (key, value) in &report.wrapper {
//!     println!("{key} = {value}");
//! }
//! ```
//!
//! The parser itself needs no subprocess:
//!
//! ```rust
//! use flatprobe_core::parse_flat_report;
//!
//! let report = parse_flat_report([
//!     "format.duration=\"120.5\"",
//!     "streams.stream.0.codec_type=\"video\"",
//!     "streams.stream.0.width=\"1280\"",
//! ]);
//! assert_eq!(report.wrapper["duration"], "120.5");
//! assert_eq!(report.video_streams[0]["width"], "1280");
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod logging;
pub mod parser;
pub mod report;
pub mod summary;

// Re-exports for public API
pub use config::ProbeConfig;
pub use error::{CoreError, CoreResult};
pub use external::{
    CommandFfprobeExecutor, FfprobeExecutor, ProbeOutput, probe_file, report_from_output,
};
pub use parser::parse_flat_report;
pub use report::{Attributes, ProbeReport, StreamKind};
pub use summary::{AudioSummary, VideoSummary, frame_rate_to_decimal};
