//! Configuration validation logic
//!
//! Validates experiment configurations for correctness before any fold is run.

use super::error::ValidationError;
use crate::config::schema::{DatasetSpec, ExperimentConfig, TrainingParams};

/// Validate an experiment configuration
///
/// Checks:
/// - Every listed dataset is defined
/// - Fold count fits the strategy
/// - Numeric values are in valid ranges
///
/// Filesystem checks live in [`validate_paths`].
pub fn validate_config(config: &ExperimentConfig) -> Result<(), ValidationError> {
    let experiment = &config.experiment;

    if experiment.datasets.is_empty() {
        return Err(ValidationError::NoDatasets);
    }
    for name in &experiment.datasets {
        if !config.datasets.contains_key(name) {
            return Err(ValidationError::UndefinedDataset(name.clone()));
        }
    }

    let min_folds = experiment.strategy.min_folds();
    if experiment.folds < min_folds {
        return Err(ValidationError::InvalidFolds {
            folds: experiment.folds,
            min: min_folds,
            strategy: experiment.strategy.to_string(),
        });
    }

    validate_training(&experiment.training)?;

    for (name, spec) in config.selected_datasets() {
        validate_dataset(name, spec)?;
    }

    Ok(())
}

fn validate_training(params: &TrainingParams) -> Result<(), ValidationError> {
    if params.epochs == 0 {
        return Err(ValidationError::InvalidEpochs(params.epochs));
    }

    if params.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(params.batch_size));
    }

    // NaN fails both comparisons, so check the accepted range positively
    if !(params.lr > 0.0 && params.lr <= 1.0) {
        return Err(ValidationError::InvalidLearningRate(params.lr));
    }

    Ok(())
}

fn validate_dataset(name: &str, spec: &DatasetSpec) -> Result<(), ValidationError> {
    if !(spec.tlen > 0.0) {
        return Err(ValidationError::InvalidTrialLength {
            dataset: name.to_string(),
            tlen: spec.tlen,
        });
    }

    if spec.decimate == 0 {
        return Err(ValidationError::InvalidDecimate {
            dataset: name.to_string(),
            value: spec.decimate,
        });
    }

    if spec.stride == 0 {
        return Err(ValidationError::InvalidStride {
            dataset: name.to_string(),
            value: spec.stride,
        });
    }

    if spec.file_extensions.is_empty() {
        return Err(ValidationError::NoExtensions(name.to_string()));
    }
    if let Some(bad) = spec.file_extensions.iter().find(|ext| !ext.starts_with('.') || ext.len() < 2) {
        return Err(ValidationError::InvalidExtension {
            dataset: name.to_string(),
            extension: bad.clone(),
        });
    }

    if spec.events.as_ref().is_some_and(Vec::is_empty) {
        return Err(ValidationError::EmptyEvents(name.to_string()));
    }

    if let Some((low, high)) = spec.bandpass {
        if !(low >= 0.0 && low < high) {
            return Err(ValidationError::InvalidBandpass {
                dataset: name.to_string(),
                low,
                high,
            });
        }
    }

    Ok(())
}

/// Check that every selected dataset's toplevel directory exists
pub fn validate_paths(config: &ExperimentConfig) -> Result<(), ValidationError> {
    for (name, spec) in config.selected_datasets() {
        if !spec.toplevel.is_dir() {
            return Err(ValidationError::ToplevelNotFound {
                dataset: name.to_string(),
                path: spec.toplevel.display().to_string(),
            });
        }
    }
    Ok(())
}
