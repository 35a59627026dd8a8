//! Subject-partition cross-validation
//!
//! Folds are drawn over subject ids, never over individual trials, so no
//! person contributes data to both the training and the test side of a split.
//!
//! ## Architecture
//!
//! - `partition`: deterministic K-way split of an ordered subject list
//! - `lmso`: leave-multiple-subjects-out (test fold `i`, validation fold `i+1`)
//! - `loso`: leave-one-subject-out (one test subject, no validation)
//! - `strategy`: config-facing selection between the two
//!
//! ## Example
//!
//! ```
//! use pliegue::cv::leave_multiple_subjects_out;
//! use pliegue::subject::subject_ids;
//!
//! let subjects = subject_ids((1..=10).map(|i| format!("S{i}")));
//! let plan = leave_multiple_subjects_out(&subjects, 5)?;
//! for split in &plan {
//!     assert_eq!(split.test.len(), 2);
//!     assert_eq!(split.validation.len(), 2);
//!     assert_eq!(split.training.len(), 6);
//! }
//! # Ok::<(), pliegue::Error>(())
//! ```

mod lmso;
mod loso;
mod partition;
mod split;
mod strategy;

#[cfg(test)]
mod proptests;

pub use lmso::{leave_multiple_subjects_out, LeaveMultipleSubjectsOut};
pub use loso::{leave_one_subject_out, LeaveOneSubjectOut};
pub use partition::{partition, shuffle_subjects, Fold};
pub use split::{Split, Splits};
pub use strategy::CvStrategy;
