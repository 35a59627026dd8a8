//! Fold-by-fold cross-validation driver

use super::process::{ClassificationProcess, Metrics};
use super::report::{CvReport, FoldResult};
use crate::config::{ExperimentSpec, TrainingParams};
use crate::cv::{leave_one_subject_out, shuffle_subjects, Split};
use crate::error::{Error, Result};
use crate::subject::{RecordingCollection, SubjectId};
use std::collections::BTreeMap;

/// Build the splits an experiment asks for.
///
/// Subjects are shuffled first only when the experiment sets a seed.
pub fn plan_splits(mut subjects: Vec<SubjectId>, spec: &ExperimentSpec) -> Result<Vec<Split>> {
    if let Some(seed) = spec.seed {
        shuffle_subjects(&mut subjects, seed);
    }
    spec.strategy.splits(&subjects, spec.folds)
}

/// Attach the fold index to a collaborator failure
fn fold_error(fold: usize, err: Error) -> Error {
    match err {
        Error::Process { message, .. } => Error::Process { fold, message },
        other => Error::Process {
            fold,
            message: other.to_string(),
        },
    }
}

/// Runs a classification process over every split of a plan
#[derive(Debug, Clone)]
pub struct CrossValidationRunner<'a> {
    collection: &'a RecordingCollection,
    params: TrainingParams,
    per_subject_eval: bool,
}

impl<'a> CrossValidationRunner<'a> {
    pub fn new(collection: &'a RecordingCollection, params: TrainingParams) -> Self {
        Self {
            collection,
            params,
            per_subject_eval: false,
        }
    }

    /// Runner with the training parameters and evaluation mode of `spec`
    pub fn from_spec(collection: &'a RecordingCollection, spec: &ExperimentSpec) -> Self {
        Self::new(collection, spec.training.clone()).with_per_subject_eval(spec.per_subject_eval)
    }

    /// Also evaluate each test subject on its own after the fold-level test
    pub fn with_per_subject_eval(mut self, enabled: bool) -> Self {
        self.per_subject_eval = enabled;
        self
    }

    /// Plan splits over the whole collection from `spec`, then run them
    pub fn run_experiment<F, P>(&self, spec: &ExperimentSpec, factory: F) -> Result<CvReport>
    where
        F: FnMut(&Split) -> Result<P>,
        P: ClassificationProcess,
    {
        let splits = plan_splits(self.collection.subject_ids(), spec)?;
        self.run(splits, factory)
    }

    /// Fit and evaluate a fresh process per split.
    ///
    /// The first failing fold aborts the run with [`Error::Process`].
    pub fn run<I, F, P>(&self, splits: I, mut factory: F) -> Result<CvReport>
    where
        I: IntoIterator<Item = Split>,
        F: FnMut(&Split) -> Result<P>,
        P: ClassificationProcess,
    {
        let mut results = Vec::new();

        for split in splits {
            let fold = split.fold;
            let view = self.collection.resolve(&split)?;
            let _span = tracing::info_span!("fold", fold).entered();
            tracing::info!(
                training = view.training.len(),
                validation = view.validation.len(),
                test = view.test.len(),
                "starting fold"
            );
            tracing::debug!(
                training_recordings = view.training.recording_count(),
                validation_recordings = view.validation.recording_count(),
                test_recordings = view.test.recording_count(),
                "resolved recordings"
            );

            let mut process = factory(&split).map_err(|e| fold_error(fold, e))?;
            process
                .fit(&view.training, &view.validation, &self.params)
                .map_err(|e| fold_error(fold, e))?;
            let metrics = process.evaluate(&view.test).map_err(|e| fold_error(fold, e))?;

            let subject_metrics = if self.per_subject_eval {
                self.evaluate_subjects(&mut process, &split)?
            } else {
                BTreeMap::new()
            };

            tracing::info!(?metrics, "finished fold");
            results.push(FoldResult {
                fold,
                test_subjects: split.test,
                metrics,
                subject_metrics,
            });
        }

        Ok(CvReport::from_folds(results))
    }

    /// Leave-one-subject-out pass over the already held-out test subjects
    fn evaluate_subjects<P: ClassificationProcess>(
        &self,
        process: &mut P,
        split: &Split,
    ) -> Result<BTreeMap<SubjectId, Metrics>> {
        let mut per_subject = BTreeMap::new();
        for inner in &leave_one_subject_out(&split.test)? {
            let group = self.collection.group(&inner.test)?;
            let metrics = process
                .evaluate(&group)
                .map_err(|e| fold_error(split.fold, e))?;
            for id in inner.test {
                per_subject.insert(id, metrics.clone());
            }
        }
        Ok(per_subject)
    }
}
