//! Validation error types
//!
//! Defines all validation error variants for experiment configurations.

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No datasets listed under experiment.datasets")]
    NoDatasets,

    #[error("Dataset '{0}' is listed but not defined under datasets")]
    UndefinedDataset(String),

    #[error("Invalid folds: {folds} (must be >= {min} for {strategy})")]
    InvalidFolds {
        folds: usize,
        min: usize,
        strategy: String,
    },

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidLearningRate(f32),

    #[error("Invalid trial length for dataset '{dataset}': {tlen} (must be > 0.0)")]
    InvalidTrialLength { dataset: String, tlen: f64 },

    #[error("Invalid decimation for dataset '{dataset}': {value} (must be >= 1)")]
    InvalidDecimate { dataset: String, value: usize },

    #[error("Invalid stride for dataset '{dataset}': {value} (must be >= 1)")]
    InvalidStride { dataset: String, value: usize },

    #[error("Invalid file extension for dataset '{dataset}': '{extension}' (must start with '.')")]
    InvalidExtension { dataset: String, extension: String },

    #[error("Dataset '{0}' lists no file extensions")]
    NoExtensions(String),

    #[error("Dataset '{0}' has an empty events list (omit it to keep all events)")]
    EmptyEvents(String),

    #[error("Invalid bandpass for dataset '{dataset}': [{low}, {high}] (need 0 <= low < high)")]
    InvalidBandpass { dataset: String, low: f64, high: f64 },

    #[error("Toplevel directory for dataset '{dataset}' does not exist: {path}")]
    ToplevelNotFound { dataset: String, path: String },
}
