//! Leave-one-subject-out cross-validation

use super::partition::{check_subjects, partition};
use super::split::{Assignment, Split, Splits};
use crate::error::{Error, Result};
use crate::subject::SubjectId;

/// Per-subject holdout plan: one split per subject, that subject alone as test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOneSubjectOut {
    subjects: Vec<SubjectId>,
    assignments: Vec<Assignment>,
}

/// Plan leave-one-subject-out over `subjects`.
///
/// Same folds as `partition(subjects, subjects.len())`. Validation is empty in
/// every split.
pub fn leave_one_subject_out(subjects: &[SubjectId]) -> Result<LeaveOneSubjectOut> {
    let assignments = partition(subjects, subjects.len())?
        .into_iter()
        .map(|fold| Assignment {
            test: fold.subjects,
            validation: Vec::new(),
        })
        .collect();

    Ok(LeaveOneSubjectOut {
        subjects: subjects.to_vec(),
        assignments,
    })
}

impl LeaveOneSubjectOut {
    /// Validate on `validation` in every split and test each other subject
    /// in turn, yielding `subjects.len() - 1` splits.
    pub fn with_validation(subjects: &[SubjectId], validation: &SubjectId) -> Result<Self> {
        check_subjects(subjects)?;
        if !subjects.contains(validation) {
            return Err(Error::UnknownSubject(validation.clone()));
        }

        let assignments: Vec<Assignment> = subjects
            .iter()
            .filter(|id| *id != validation)
            .map(|id| Assignment {
                test: vec![id.clone()],
                validation: vec![validation.clone()],
            })
            .collect();
        if assignments.is_empty() {
            return Err(Error::EmptySubjectSet);
        }

        Ok(Self {
            subjects: subjects.to_vec(),
            assignments,
        })
    }

    /// Lazily yield one split per test subject
    pub fn iter(&self) -> Splits<'_> {
        Splits::new(&self.subjects, &self.assignments)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn subjects(&self) -> &[SubjectId] {
        &self.subjects
    }
}

impl<'a> IntoIterator for &'a LeaveOneSubjectOut {
    type Item = Split;
    type IntoIter = Splits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
