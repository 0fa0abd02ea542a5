//! FFprobe invocation and output capture
//!
//! This module runs ffprobe once against a media file with a fixed set of
//! options asking for the `format` and `stream` sections in flat print format.
//! Standard output and standard error are redirected into temporary files and
//! read back once the process has exited.

use crate::config::{FFPROBE_PROGRAM, ProbeConfig};
use crate::error::{CoreError, CoreResult};
use crate::external::decode::{decode_output, split_lines};
use crate::logging;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// ffprobe log level 16 is `error`: only real errors reach stderr.
const FFPROBE_LOG_LEVEL: &str = "16";

/// Captured result of one ffprobe run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Standard output split into lines, in emission order.
    pub stdout_lines: Vec<String>,
    /// Standard error as text.
    pub stderr: String,
    /// False when ffprobe exited non-zero or wrote anything to stderr.
    pub success: bool,
}

/// Trait for running ffprobe against a file.
///
/// The command-backed implementation is used in production; tests provide
/// their own implementations returning canned output.
pub trait FfprobeExecutor {
    /// Runs the probe and returns its captured output.
    ///
    /// An `Err` means the tool could not be run at all. A tool that ran but
    /// failed is reported through [`ProbeOutput::success`].
    fn probe(&self, input: &Path) -> CoreResult<ProbeOutput>;
}

/// Returns the ffprobe arguments used for `input`.
pub fn probe_args(input: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-loglevel",
        FFPROBE_LOG_LEVEL,
        "-show_entries",
        "format:stream",
        "-print_format",
        "flat",
        "-i",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(input.as_os_str().to_os_string());
    args
}

/// ffprobe executor that spawns the real binary.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: PathBuf,
}

impl CommandFfprobeExecutor {
    /// Uses the given executable without any lookup.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolves the ffprobe executable from the configuration.
    ///
    /// A configured path is used when it exists; otherwise ffprobe is
    /// searched for in `PATH`. A path given through
    /// [`ProbeConfig::with_ffprobe_path`] that does not exist is an error.
    pub fn locate(config: &ProbeConfig) -> CoreResult<Self> {
        if let Some(path) = &config.ffprobe_path {
            if path.is_file() {
                log::debug!("Using configured ffprobe: {}", path.display());
                return Ok(Self::new(path));
            }
            if config.ffprobe_path_required {
                return Err(CoreError::ConfiguredToolNotFound(path.clone()));
            }
            log::warn!(
                "Configured ffprobe '{}' does not exist, searching PATH instead",
                path.display()
            );
        }

        match which::which(FFPROBE_PROGRAM) {
            Ok(path) => {
                log::debug!("Found ffprobe in PATH: {}", path.display());
                Ok(Self::new(path))
            }
            Err(err) => {
                log::debug!("ffprobe lookup failed: {err}");
                Err(CoreError::DependencyNotFound(FFPROBE_PROGRAM.to_string()))
            }
        }
    }

    /// Path of the executable this executor runs.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe(&self, input: &Path) -> CoreResult<ProbeOutput> {
        let mut stdout_file = tempfile::tempfile()?;
        let mut stderr_file = tempfile::tempfile()?;

        let mut cmd = Command::new(&self.program);
        cmd.args(probe_args(input))
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_file.try_clone()?))
            .stderr(Stdio::from(stderr_file.try_clone()?));

        logging::log_command(&cmd);

        let status = cmd.status().map_err(|e| {
            let name = self.program.display().to_string();
            if e.kind() == io::ErrorKind::NotFound {
                log::error!("ffprobe executable '{name}' not found");
                CoreError::DependencyNotFound(name)
            } else {
                log::error!("Failed to start '{name}': {e}");
                CoreError::CommandStart(name, e)
            }
        })?;

        let stdout = read_back(&mut stdout_file)?;
        let stderr = read_back(&mut stderr_file)?;

        let stdout_lines = split_lines(&decode_output(&stdout));
        let stderr = decode_output(&stderr).into_owned();
        let success = status.success() && stderr.trim().is_empty();

        if success {
            log::debug!("ffprobe produced {} lines", stdout_lines.len());
        } else {
            log::debug!("ffprobe failed with status {status}");
        }

        Ok(ProbeOutput {
            stdout_lines,
            stderr,
            success,
        })
    }
}

/// Reads a capture file from the start.
fn read_back(file: &mut File) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    file.seek(SeekFrom::Start(0))?;
    file.read_to_end(&mut buf)?;
    Ok(buf)
}
