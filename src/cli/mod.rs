//! CLI module for pliegue
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;

pub use commands::{parse_subject_list, run_command};
pub use logging::{init_tracing, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
