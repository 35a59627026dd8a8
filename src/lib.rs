//! # Pliegue: subject-stratified cross-validation
//!
//! Plans and drives cross-validation for EEG classification experiments
//! where folds must respect subject boundaries: no participant's recordings
//! may end up on both the training and the test side of a split.
//!
//! ## Modules
//!
//! - `subject`: subjects, recordings and the immutable collection a run works on
//! - `cv`: fold partitioning, leave-multiple-subjects-out and leave-one-subject-out
//! - `config`: YAML experiment configuration with strict validation
//! - `run`: fold-by-fold driver around a pluggable classification process
//! - `cli`: the `pliegue` command-line tool
//!
//! ## Example
//!
//! ```
//! use pliegue::cv::leave_one_subject_out;
//! use pliegue::subject::subject_ids;
//!
//! let subjects = subject_ids(["S1", "S2", "S3", "S4", "S5"]);
//! let plan = leave_one_subject_out(&subjects)?;
//! assert_eq!(plan.iter().count(), 5);
//! for split in &plan {
//!     assert_eq!(split.test.len(), 1);
//!     assert_eq!(split.training.len(), 4);
//! }
//! # Ok::<(), pliegue::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod cv;
pub mod error;
pub mod run;
pub mod subject;

pub use error::{Error, Result};
