use flatprobe_core::{CoreError, CoreResult, FfprobeExecutor, ProbeOutput, probe_file};
use std::cell::Cell;
use std::path::Path;

/// Executor returning canned output and counting calls.
struct MockFfprobeExecutor {
    output: ProbeOutput,
    calls: Cell<usize>,
}

impl MockFfprobeExecutor {
    fn new(lines: &[&str], stderr: &str, success: bool) -> Self {
        Self {
            output: ProbeOutput {
                stdout_lines: lines.iter().map(|l| l.to_string()).collect(),
                stderr: stderr.to_string(),
                success,
            },
            calls: Cell::new(0),
        }
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe(&self, _input: &Path) -> CoreResult<ProbeOutput> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.output.clone())
    }
}

struct UnavailableExecutor;

impl FfprobeExecutor for UnavailableExecutor {
    fn probe(&self, _input: &Path) -> CoreResult<ProbeOutput> {
        Err(CoreError::DependencyNotFound("ffprobe".to_string()))
    }
}

#[test]
fn test_probe_file_parses_successful_output() {
    let executor = MockFfprobeExecutor::new(
        &[
            "format.format_name=\"matroska,webm\"",
            "streams.stream.0.codec_type=\"video\"",
            "streams.stream.1.codec_type=\"audio\"",
            "",
        ],
        "",
        true,
    );

    let report = probe_file(&executor, Path::new("movie.mkv")).unwrap();
    assert_eq!(executor.calls.get(), 1);
    assert_eq!(report.wrapper["format_name"], "matroska,webm");
    assert_eq!(report.video_streams.len(), 1);
    assert_eq!(report.audio_streams.len(), 1);
}

#[test]
fn test_probe_failure_reports_error_text() {
    let executor = MockFfprobeExecutor::new(
        &["streams.stream.0.codec_type=\"video\""],
        "movie.mkv: Invalid data found when processing input\n",
        false,
    );

    let err = probe_file(&executor, Path::new("movie.mkv")).unwrap_err();
    match err {
        CoreError::ProbeFailed { path, stderr } => {
            assert_eq!(path, Path::new("movie.mkv"));
            assert_eq!(stderr, "movie.mkv: Invalid data found when processing input");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_probe_failure_message() {
    let executor = MockFfprobeExecutor::new(&[], "No such file or directory", false);
    let err = probe_file(&executor, Path::new("missing.mkv")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error when reading file 'missing.mkv' with ffprobe: No such file or directory"
    );
}

#[test]
fn test_executor_errors_propagate() {
    let err = probe_file(&UnavailableExecutor, Path::new("movie.mkv")).unwrap_err();
    assert!(matches!(err, CoreError::DependencyNotFound(name) if name == "ffprobe"));
}

#[test]
fn test_probe_file_accepts_trait_objects() {
    let executor: Box<dyn FfprobeExecutor> =
        Box::new(MockFfprobeExecutor::new(&["format.duration=1"], "", true));
    let report = probe_file(executor.as_ref(), Path::new("clip.mp4")).unwrap();
    assert_eq!(report.wrapper["duration"], "1");
}
