// ============================================================================
// flatprobe-cli/src/commands/probe.rs
// ============================================================================
//
// PROBE COMMAND: Run ffprobe on one file and print the report
//
// Flow: validate the input path, locate ffprobe, run it once, refuse to parse
// when it failed, then render the report as text, summary or JSON.

use crate::cli::Cli;
use crate::error::CliResult;
use crate::output;
use flatprobe_core::{
    CommandFfprobeExecutor, CoreError, FfprobeExecutor, ProbeConfig, report_from_output,
};
use log::{debug, info};
use std::io::Write;

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub json: bool,
    pub summary: bool,
    pub show_raw: bool,
    pub styled: bool,
}

impl RenderOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            summary: cli.summary,
            show_raw: cli.show_raw,
            styled: console::colors_enabled(),
        }
    }
}

/// Entry point used by `main`: locates ffprobe and prints to stdout.
pub fn run_probe(cli: &Cli, config: &ProbeConfig) -> CliResult<()> {
    if !cli.input.is_file() {
        return Err(CoreError::InputNotFound(cli.input.clone()));
    }

    let executor = CommandFfprobeExecutor::locate(config)?;
    info!("Probing {} with {}", cli.input.display(), executor.program().display());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_executor(&executor, cli, RenderOptions::from_cli(cli), &mut handle)
}

/// Runs the probe with `executor` and writes the rendered report to `out`.
pub fn run_with_executor<E, W>(
    executor: &E,
    cli: &Cli,
    options: RenderOptions,
    out: &mut W,
) -> CliResult<()>
where
    E: FfprobeExecutor + ?Sized,
    W: Write,
{
    let probe_output = executor.probe(&cli.input)?;

    if options.show_raw {
        out.write_all(output::render_raw(&probe_output, options.styled).as_bytes())?;
    }

    let report = report_from_output(&cli.input, &probe_output)?;
    debug!(
        "Parsed {} wrapper attributes, {} video and {} audio streams",
        report.wrapper.len(),
        report.video_streams.len(),
        report.audio_streams.len()
    );

    let rendered = if options.json {
        let mut json = report.to_json()?;
        json.push('\n');
        json
    } else if options.summary {
        output::render_summary(&report, options.styled)
    } else {
        output::render_report(&report, options.styled)
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
