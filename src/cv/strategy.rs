//! Cross-validation strategy selection

use super::lmso::leave_multiple_subjects_out;
use super::loso::leave_one_subject_out;
use super::split::Split;
use crate::error::Result;
use crate::subject::SubjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How subjects are held out across folds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvStrategy {
    /// Leave multiple subjects out (person-stratified K-fold)
    #[default]
    Lmso,
    /// Leave one subject out
    Loso,
}

impl CvStrategy {
    /// Materialise the splits for `subjects`. `folds` is ignored for LOSO.
    pub fn splits(self, subjects: &[SubjectId], folds: usize) -> Result<Vec<Split>> {
        match self {
            CvStrategy::Lmso => Ok(leave_multiple_subjects_out(subjects, folds)?.iter().collect()),
            CvStrategy::Loso => Ok(leave_one_subject_out(subjects)?.iter().collect()),
        }
    }

    /// Minimum fold count the strategy accepts
    pub fn min_folds(self) -> usize {
        match self {
            CvStrategy::Lmso => 2,
            CvStrategy::Loso => 1,
        }
    }
}

impl fmt::Display for CvStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvStrategy::Lmso => write!(f, "lmso"),
            CvStrategy::Loso => write!(f, "loso"),
        }
    }
}

impl std::str::FromStr for CvStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lmso" => Ok(CvStrategy::Lmso),
            "loso" => Ok(CvStrategy::Loso),
            _ => Err(format!("Unknown strategy: {s}. Valid strategies: lmso, loso")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::subject_ids;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("lmso".parse::<CvStrategy>().unwrap(), CvStrategy::Lmso);
        assert_eq!("LOSO".parse::<CvStrategy>().unwrap(), CvStrategy::Loso);
        assert!("kfold".parse::<CvStrategy>().is_err());
    }

    #[test]
    fn test_loso_ignores_folds() {
        let subjects = subject_ids(["A", "B", "C"]);
        let splits = CvStrategy::Loso.splits(&subjects, 99).unwrap();
        assert_eq!(splits.len(), 3);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for strategy in [CvStrategy::Lmso, CvStrategy::Loso] {
            assert_eq!(strategy.to_string().parse::<CvStrategy>().unwrap(), strategy);
        }
    }
}
