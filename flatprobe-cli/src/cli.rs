// flatprobe-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "flatprobe",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Print wrapper, video and audio stream metadata of a media file",
    long_about = "Runs ffprobe with flat print format against a single media file and prints \
                  the container (wrapper) attributes followed by every video and audio stream."
)]
pub struct Cli {
    /// Media file to probe
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the ffprobe executable (defaults to FLATPROBE_FFPROBE, then PATH)
    #[arg(long, value_name = "PATH")]
    pub ffprobe: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, conflicts_with_all = ["summary", "show_raw"])]
    pub json: bool,

    /// Print only the main properties of each stream
    #[arg(short, long)]
    pub summary: bool,

    /// Also print ffprobe's raw output and error text
    #[arg(long)]
    pub show_raw: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let cli = Cli::try_parse_from(["flatprobe", "movie.mkv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("movie.mkv"));
        assert!(cli.ffprobe.is_none());
        assert!(!cli.json && !cli.summary && !cli.show_raw && !cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "flatprobe",
            "--ffprobe",
            "/opt/ffmpeg/bin/ffprobe",
            "--summary",
            "--show-raw",
            "-v",
            "movie.mkv",
        ])
        .unwrap();
        assert_eq!(cli.ffprobe, Some(PathBuf::from("/opt/ffmpeg/bin/ffprobe")));
        assert!(cli.summary && cli.show_raw && cli.verbose);
    }

    #[test]
    fn test_json_conflicts_with_text_modes() {
        assert!(Cli::try_parse_from(["flatprobe", "--json", "--summary", "a.mkv"]).is_err());
        assert!(Cli::try_parse_from(["flatprobe", "--json", "--show-raw", "a.mkv"]).is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["flatprobe"]).is_err());
    }
}
