//! Logging helpers shared by the core library.
//!
//! The core only talks to the `log` facade; the binary decides which backend
//! receives the records.

use log::debug;
use std::process::Command;

/// Log a command being executed
pub fn log_command(cmd: &Command) {
    debug!("Executing command: {}", format_command(cmd));
}

/// Renders a command as a single shell-like line for log output.
pub fn format_command(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();
    if args.is_empty() {
        program.into_owned()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
