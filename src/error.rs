//! Error types with actionable diagnostics
//!
//! Partition errors are raised eagerly, before the first split is produced,
//! so a caller never sees a half-built cross-validation plan.

use crate::config::ValidationError;
use crate::subject::SubjectId;
use thiserror::Error;

/// Result type alias for pliegue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning or running cross-validation.
#[derive(Error, Debug)]
pub enum Error {
    /// Fold count outside `1..=subjects`.
    #[error("Invalid fold count: {folds} (must be between 1 and {subjects}, the number of subjects)")]
    InvalidFoldCount { folds: usize, subjects: usize },

    /// Leave-multiple-subjects-out needs a spare fold for validation.
    #[error("Insufficient folds: {0}\n  → leave-multiple-subjects-out needs at least 2 folds to reserve a validation fold")]
    InsufficientFolds(usize),

    /// No subjects to partition.
    #[error("Subject set is empty\n  → Check dataset exclusions and the recording mapping")]
    EmptySubjectSet,

    /// The same subject id was given twice.
    #[error("Duplicate subject: {0}")]
    DuplicateSubject(SubjectId),

    /// A split mentions a subject the collection does not know.
    #[error("Unknown subject: {0}")]
    UnknownSubject(SubjectId),

    /// Validation and test sets share a subject.
    #[error("Validation and test sets overlap on subject: {0}")]
    OverlappingSplit(SubjectId),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// The training/evaluation collaborator failed on a fold.
    #[error("Fold {fold} failed: {message}")]
    Process { fold: usize, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Whether re-running with corrected parameters can fix this error.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Process { .. } | Self::Io { .. })
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFoldCount { .. } => "E001",
            Self::InsufficientFolds(_) => "E002",
            Self::EmptySubjectSet => "E003",
            Self::DuplicateSubject(_) => "E004",
            Self::UnknownSubject(_) => "E005",
            Self::OverlappingSplit(_) => "E006",
            Self::ConfigError(_) => "E010",
            Self::Validation(_) => "E011",
            Self::Process { .. } => "E020",
            Self::Io { .. } => "E050",
        }
    }
}
