//! Pliegue CLI
//!
//! # Usage
//!
//! ```bash
//! # Check a config
//! pliegue validate experiment.yaml --check-paths
//!
//! # Show the resolved config
//! pliegue info experiment.yaml --format yaml
//!
//! # Print the fold plan for a subject list
//! pliegue folds experiment.yaml --subjects-file subjects.txt --folds 5
//! ```

use clap::Parser;
use pliegue::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
