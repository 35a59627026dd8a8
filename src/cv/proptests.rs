//! Property-based tests for subject partitioning

use super::*;
use crate::subject::{subject_ids, SubjectId};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_subjects_and_k() -> impl Strategy<Value = (Vec<SubjectId>, usize)> {
    (1usize..60).prop_flat_map(|n| {
        let ids = subject_ids((0..n).map(|i| format!("P{i:03}")));
        (Just(ids), 1..=n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_partition_covers_exactly_once((subjects, k) in arb_subjects_and_k()) {
        let folds = partition(&subjects, k).unwrap();
        prop_assert_eq!(folds.len(), k);

        let flattened: Vec<SubjectId> = folds.iter().flat_map(|f| f.subjects.iter().cloned()).collect();
        prop_assert_eq!(&flattened, &subjects);
        prop_assert!(folds.iter().all(|f| !f.is_empty()));
    }

    #[test]
    fn prop_fold_sizes_differ_by_at_most_one((subjects, k) in arb_subjects_and_k()) {
        let sizes: Vec<usize> = partition(&subjects, k).unwrap().iter().map(Fold::len).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1);
        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn prop_lmso_tests_partition_subjects((subjects, k) in arb_subjects_and_k()) {
        prop_assume!(k >= 2);
        let plan = leave_multiple_subjects_out(&subjects, k).unwrap();
        let splits: Vec<Split> = plan.iter().collect();
        prop_assert_eq!(splits.len(), k);

        let mut tested = HashSet::new();
        for split in &splits {
            prop_assert!(split.all_disjoint());
            prop_assert_eq!(split.subject_count(), subjects.len());
            for id in &split.test {
                prop_assert!(tested.insert(id.clone()));
            }
        }
        prop_assert_eq!(tested.len(), subjects.len());
    }

    #[test]
    fn prop_loso_singleton_tests((subjects, _k) in arb_subjects_and_k()) {
        let splits: Vec<Split> = leave_one_subject_out(&subjects).unwrap().iter().collect();
        prop_assert_eq!(splits.len(), subjects.len());

        let tested: Vec<SubjectId> = splits.iter().map(|s| {
            assert_eq!(s.test.len(), 1);
            s.test[0].clone()
        }).collect();
        prop_assert_eq!(&tested, &subjects);
        prop_assert!(splits.iter().all(|s| s.training.len() == subjects.len() - 1));
    }

    #[test]
    fn prop_plans_are_deterministic((subjects, k) in arb_subjects_and_k()) {
        prop_assert_eq!(partition(&subjects, k).unwrap(), partition(&subjects, k).unwrap());
        if k >= 2 {
            let a: Vec<Split> = leave_multiple_subjects_out(&subjects, k).unwrap().iter().collect();
            let b: Vec<Split> = leave_multiple_subjects_out(&subjects, k).unwrap().iter().collect();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_too_many_folds_rejected((subjects, _k) in arb_subjects_and_k()) {
        let too_many = subjects.len() + 1;
        let is_invalid_fold_count = matches!(
            partition(&subjects, too_many),
            Err(crate::Error::InvalidFoldCount { .. })
        );
        prop_assert!(is_invalid_fold_count);
    }
}
