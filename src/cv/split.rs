//! Training/validation/test splits

use crate::subject::SubjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Subject grouping for one cross-validation iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Fold index this split was produced for
    pub fold: usize,
    pub training: Vec<SubjectId>,
    pub validation: Vec<SubjectId>,
    pub test: Vec<SubjectId>,
}

impl Split {
    /// Whether no subject appears in more than one of the three sets
    pub fn all_disjoint(&self) -> bool {
        let mut seen = HashSet::new();
        self.training
            .iter()
            .chain(&self.validation)
            .chain(&self.test)
            .all(|id| seen.insert(id))
    }

    /// Total subjects across training, validation and test
    pub fn subject_count(&self) -> usize {
        self.training.len() + self.validation.len() + self.test.len()
    }
}

fn join(ids: &[SubjectId]) -> String {
    ids.iter().map(SubjectId::as_str).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fold {}:", self.fold)?;
        writeln!(f, "  Training:   [{}]", join(&self.training))?;
        writeln!(f, "  Validation: [{}]", join(&self.validation))?;
        write!(f, "  Test:       [{}]", join(&self.test))
    }
}

/// Held-out sets of one fold; training is whatever is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub(crate) test: Vec<SubjectId>,
    pub(crate) validation: Vec<SubjectId>,
}

/// Lazy iterator over the splits of a cross-validation plan.
///
/// Training sets are materialised only when a split is yielded.
#[derive(Debug, Clone)]
pub struct Splits<'a> {
    subjects: &'a [SubjectId],
    assignments: std::iter::Enumerate<std::slice::Iter<'a, Assignment>>,
}

impl<'a> Splits<'a> {
    pub(crate) fn new(subjects: &'a [SubjectId], assignments: &'a [Assignment]) -> Self {
        Self {
            subjects,
            assignments: assignments.iter().enumerate(),
        }
    }
}

impl Iterator for Splits<'_> {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        let (fold, assignment) = self.assignments.next()?;
        let held_out: HashSet<&SubjectId> = assignment
            .test
            .iter()
            .chain(&assignment.validation)
            .collect();
        let training = self
            .subjects
            .iter()
            .filter(|id| !held_out.contains(id))
            .cloned()
            .collect();

        Some(Split {
            fold,
            training,
            validation: assignment.validation.clone(),
            test: assignment.test.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.assignments.size_hint()
    }
}

impl ExactSizeIterator for Splits<'_> {}
