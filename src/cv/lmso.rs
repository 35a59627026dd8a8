//! Leave-multiple-subjects-out cross-validation

use super::partition::{check_subjects, check_unique, partition};
use super::split::{Assignment, Split, Splits};
use crate::error::{Error, Result};
use crate::subject::SubjectId;
use std::collections::HashSet;

/// Person-stratified K-fold plan.
///
/// Built and validated up front; [`iter`](Self::iter) can be called any
/// number of times and always yields the same splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveMultipleSubjectsOut {
    subjects: Vec<SubjectId>,
    assignments: Vec<Assignment>,
}

/// Plan `k`-fold leave-multiple-subjects-out over `subjects`.
///
/// Fold `i` is the test set and fold `(i + 1) mod k` the validation set;
/// every other fold is training.
///
/// # Errors
///
/// Everything [`partition`] rejects, plus [`Error::InsufficientFolds`] when
/// `k == 1` since a single fold leaves nothing to validate on.
pub fn leave_multiple_subjects_out(
    subjects: &[SubjectId],
    k: usize,
) -> Result<LeaveMultipleSubjectsOut> {
    let folds = partition(subjects, k)?;
    if k < 2 {
        return Err(Error::InsufficientFolds(k));
    }
    if k == 2 {
        tracing::warn!("2-fold leave-multiple-subjects-out leaves no subjects for training");
    }

    let assignments = (0..k)
        .map(|i| Assignment {
            test: folds[i].subjects.clone(),
            validation: folds[(i + 1) % k].subjects.clone(),
        })
        .collect();

    Ok(LeaveMultipleSubjectsOut {
        subjects: subjects.to_vec(),
        assignments,
    })
}

fn check_known(known: &HashSet<&SubjectId>, ids: &[SubjectId]) -> Result<()> {
    match ids.iter().find(|id| !known.contains(id)) {
        Some(id) => Err(Error::UnknownSubject(id.clone())),
        None => Ok(()),
    }
}

impl LeaveMultipleSubjectsOut {
    /// Keep `test` as the test set of every split and rotate validation
    /// through `k` folds of the remaining subjects.
    pub fn with_fixed_test(subjects: &[SubjectId], test: &[SubjectId], k: usize) -> Result<Self> {
        check_subjects(subjects)?;
        if test.is_empty() {
            return Err(Error::EmptySubjectSet);
        }
        check_unique(test)?;
        let known: HashSet<&SubjectId> = subjects.iter().collect();
        check_known(&known, test)?;

        let held: HashSet<&SubjectId> = test.iter().collect();
        let remainder: Vec<SubjectId> = subjects
            .iter()
            .filter(|id| !held.contains(id))
            .cloned()
            .collect();
        let folds = partition(&remainder, k)?;

        let assignments = folds
            .into_iter()
            .map(|fold| Assignment {
                test: test.to_vec(),
                validation: fold.subjects,
            })
            .collect();

        Ok(Self {
            subjects: subjects.to_vec(),
            assignments,
        })
    }

    /// Use caller-chosen `(test, validation)` sets, one pair per fold.
    ///
    /// Training is every subject in neither set. Validation may be empty;
    /// test may not.
    pub fn from_explicit(
        subjects: &[SubjectId],
        assignments: Vec<(Vec<SubjectId>, Vec<SubjectId>)>,
    ) -> Result<Self> {
        check_subjects(subjects)?;
        if assignments.is_empty() {
            return Err(Error::InvalidFoldCount {
                folds: 0,
                subjects: subjects.len(),
            });
        }
        let known: HashSet<&SubjectId> = subjects.iter().collect();

        let assignments = assignments
            .into_iter()
            .map(|(test, validation)| {
                if test.is_empty() {
                    return Err(Error::EmptySubjectSet);
                }
                check_unique(&test)?;
                check_unique(&validation)?;
                check_known(&known, &test)?;
                check_known(&known, &validation)?;

                let test_set: HashSet<&SubjectId> = test.iter().collect();
                if let Some(id) = validation.iter().find(|id| test_set.contains(id)) {
                    return Err(Error::OverlappingSplit(id.clone()));
                }
                Ok(Assignment { test, validation })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            subjects: subjects.to_vec(),
            assignments,
        })
    }

    /// Lazily yield one split per fold
    pub fn iter(&self) -> Splits<'_> {
        Splits::new(&self.subjects, &self.assignments)
    }

    /// Number of splits (folds)
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Subjects the plan was built over, in input order
    pub fn subjects(&self) -> &[SubjectId] {
        &self.subjects
    }
}

impl<'a> IntoIterator for &'a LeaveMultipleSubjectsOut {
    type Item = Split;
    type IntoIter = Splits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
