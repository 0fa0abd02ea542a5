// flatprobe-cli/src/main.rs
//
// Entry point for the `flatprobe` binary: parses arguments, sets up logging,
// runs the probe command and maps errors to a non-zero exit status.

use clap::Parser;
use flatprobe_cli::{Cli, logging, run_probe};
use flatprobe_core::ProbeConfig;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = ProbeConfig::new().with_ffprobe_path(cli.ffprobe.clone());
    logging::init_with_level(logging::resolve_level(cli.verbose, &config.log_level));

    if let Err(e) = run_probe(&cli, &config) {
        log::debug!("Probe run failed: {e:?}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
