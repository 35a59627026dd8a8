//! Deterministic subject partitioning

use crate::error::{Error, Result};
use crate::subject::SubjectId;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashSet;
use std::ops::Range;

/// One disjoint group of subjects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fold {
    pub index: usize,
    pub subjects: Vec<SubjectId>,
}

impl Fold {
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// Reject empty subject lists and repeated ids.
pub(crate) fn check_subjects(subjects: &[SubjectId]) -> Result<()> {
    if subjects.is_empty() {
        return Err(Error::EmptySubjectSet);
    }
    check_unique(subjects)
}

pub(crate) fn check_unique(subjects: &[SubjectId]) -> Result<()> {
    let mut seen = HashSet::with_capacity(subjects.len());
    for id in subjects {
        if !seen.insert(id) {
            return Err(Error::DuplicateSubject(id.clone()));
        }
    }
    Ok(())
}

/// Index ranges of `k` folds over `n` items.
///
/// The first `n % k` folds take one extra item, so sizes differ by at most
/// one and larger folds come first.
fn fold_ranges(n: usize, k: usize) -> impl Iterator<Item = Range<usize>> {
    let fold_size = n / k;
    let remainder = n % k;
    let mut start = 0;
    (0..k).map(move |i| {
        let extra = usize::from(i < remainder);
        let end = start + fold_size + extra;
        let range = start..end;
        start = end;
        range
    })
}

/// Split `subjects` into `k` contiguous folds, in input order.
///
/// No shuffling happens here; callers that want a randomised assignment
/// shuffle first with [`shuffle_subjects`].
///
/// # Errors
///
/// - [`Error::EmptySubjectSet`] when `subjects` is empty
/// - [`Error::DuplicateSubject`] when an id repeats
/// - [`Error::InvalidFoldCount`] when `k` is 0 or larger than `subjects.len()`
pub fn partition(subjects: &[SubjectId], k: usize) -> Result<Vec<Fold>> {
    check_subjects(subjects)?;
    if k == 0 || k > subjects.len() {
        return Err(Error::InvalidFoldCount {
            folds: k,
            subjects: subjects.len(),
        });
    }

    let folds: Vec<Fold> = fold_ranges(subjects.len(), k)
        .enumerate()
        .map(|(index, range)| Fold {
            index,
            subjects: subjects[range].to_vec(),
        })
        .collect();

    tracing::debug!(
        subjects = subjects.len(),
        folds = k,
        largest = folds.first().map_or(0, Fold::len),
        smallest = folds.last().map_or(0, Fold::len),
        "partitioned subjects"
    );

    Ok(folds)
}

/// Reorder `subjects` with a seeded shuffle.
///
/// The same seed always produces the same order.
pub fn shuffle_subjects(subjects: &mut [SubjectId], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    subjects.shuffle(&mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_ranges_cover_everything() {
        let ranges: Vec<_> = fold_ranges(10, 3).collect();
        assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn test_fold_ranges_even() {
        let sizes: Vec<_> = fold_ranges(10, 5).map(|r| r.len()).collect();
        assert_eq!(sizes, vec![2; 5]);
    }
}
