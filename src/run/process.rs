//! Training/evaluation collaborator interface

use crate::config::TrainingParams;
use crate::error::Result;
use crate::subject::SubjectGroup;
use std::collections::BTreeMap;

/// Metric name to value, e.g. `{"Accuracy": 0.82}`
pub type Metrics = BTreeMap<String, f64>;

/// A model plus its training loop, as seen by cross-validation.
///
/// The runner creates one process per split, so implementations may keep
/// model state between `fit` and `evaluate` without resetting it.
pub trait ClassificationProcess {
    /// Train on `training`, using `validation` for early stopping or model
    /// selection. `validation` may be empty.
    fn fit(
        &mut self,
        training: &SubjectGroup<'_>,
        validation: &SubjectGroup<'_>,
        params: &TrainingParams,
    ) -> Result<()>;

    /// Score the trained model on `test`
    fn evaluate(&mut self, test: &SubjectGroup<'_>) -> Result<Metrics>;
}
