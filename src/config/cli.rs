//! CLI argument parsing
//!
//! ```bash
//! pliegue validate experiment.yaml --check-paths
//! pliegue info experiment.yaml --format json
//! pliegue folds experiment.yaml --subjects-file subjects.txt --folds 5
//! ```

use super::schema::ExperimentConfig;
use crate::cv::CvStrategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pliegue: subject-stratified cross-validation planning
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pliegue")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Leave-multiple/one-subject-out cross-validation for EEG experiments")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate an experiment configuration
    Validate(ValidateArgs),

    /// Display a resolved experiment configuration
    Info(InfoArgs),

    /// Print the cross-validation fold plan for a set of subjects
    Folds(FoldsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Also check that dataset toplevel directories exist
    #[arg(long)]
    pub check_paths: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the folds command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct FoldsArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Subject ids, in the order to partition
    #[arg(long, num_args = 1.., conflicts_with = "subjects_file")]
    pub subjects: Vec<String>,

    /// File with one subject id per line (blank lines and `#` comments ignored)
    #[arg(long)]
    pub subjects_file: Option<PathBuf>,

    /// Override hold-out strategy
    #[arg(long)]
    pub strategy: Option<CvStrategy>,

    /// Override number of folds
    #[arg(long)]
    pub folds: Option<usize>,

    /// Override shuffle seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse CLI arguments from an iterator (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a loaded configuration
pub fn apply_overrides(config: &mut ExperimentConfig, args: &FoldsArgs) {
    if let Some(strategy) = args.strategy {
        config.experiment.strategy = strategy;
    }
    if let Some(folds) = args.folds {
        config.experiment.folds = folds;
    }
    if let Some(seed) = args.seed {
        config.experiment.seed = Some(seed);
    }
}
