//! Declarative experiment configuration
//!
//! Experiments are described in YAML: which datasets to use, how many folds,
//! which hold-out strategy, and the training hyperparameters handed to the
//! classification process.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, FoldsArgs, InfoArgs, OutputFormat, ValidateArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::{DatasetSpec, EventLabel, ExperimentConfig, ExperimentSpec, TrainingParams};
pub use validate::{validate_config, validate_paths, ValidationError};
