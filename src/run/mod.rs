//! Cross-validated training loop
//!
//! Training and scoring are delegated to a [`ClassificationProcess`]; this
//! module only decides which subjects each call sees and aggregates scores.

mod process;
mod report;
mod runner;


pub use process::{ClassificationProcess, Metrics};
pub use report::{CvReport, FoldResult, MetricSummary};
pub use runner::{plan_splits, CrossValidationRunner};
