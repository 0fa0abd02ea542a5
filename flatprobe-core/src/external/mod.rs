// ============================================================================
// flatprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Running ffprobe and handing its output to the parser
//
// The executor trait keeps the subprocess behind a seam so that the glue in
// `probe_file` can be exercised without ffprobe installed.

use crate::error::{CoreError, CoreResult};
use crate::parser::parse_flat_report;
use crate::report::ProbeReport;
use std::path::Path;

/// Decoding of captured output bytes into text lines
pub mod decode;

/// Traits and implementations for executing ffprobe
pub mod ffprobe_executor;

pub use decode::{decode_output, split_lines};
pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor, ProbeOutput, probe_args};

/// Converts a captured probe result into a report.
///
/// A failed probe is turned into [`CoreError::ProbeFailed`] carrying the
/// error text, and the parser is not run.
pub fn report_from_output(input: &Path, output: &ProbeOutput) -> CoreResult<ProbeReport> {
    if !output.success {
        return Err(CoreError::ProbeFailed {
            path: input.to_path_buf(),
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(parse_flat_report(&output.stdout_lines))
}

/// Probes `input` with `executor` and parses the flat report.
pub fn probe_file<E: FfprobeExecutor + ?Sized>(executor: &E, input: &Path) -> CoreResult<ProbeReport> {
    log::debug!("Probing {}", input.display());
    let output = executor.probe(input)?;
    report_from_output(input, &output)
}
