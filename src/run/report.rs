//! Cross-validation results

use super::process::Metrics;
use crate::subject::SubjectId;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of one split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldResult {
    pub fold: usize,
    pub test_subjects: Vec<SubjectId>,
    /// Metrics over the whole test set
    pub metrics: Metrics,
    /// Metrics per test subject (empty unless per-subject evaluation is on)
    pub subject_metrics: BTreeMap<SubjectId, Metrics>,
}

/// Mean and spread of one metric across folds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub mean: f64,
    /// Sample standard deviation, 0 for a single fold
    pub std: f64,
    /// Number of folds that reported the metric
    pub folds: usize,
}

impl MetricSummary {
    fn from_scores(scores: &[f64]) -> Self {
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let std = if scores.len() > 1 {
            let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>()
                / (scores.len() - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };
        Self {
            mean,
            std,
            folds: scores.len(),
        }
    }
}

/// Results of a full cross-validation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvReport {
    pub folds: Vec<FoldResult>,
    pub summary: BTreeMap<String, MetricSummary>,
}

impl CvReport {
    /// Build a report, summarising every metric any fold reported
    pub fn from_folds(folds: Vec<FoldResult>) -> Self {
        let mut scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for fold in &folds {
            for (name, value) in &fold.metrics {
                scores.entry(name.as_str()).or_default().push(*value);
            }
        }
        let summary = scores
            .into_iter()
            .map(|(name, values)| (name.to_string(), MetricSummary::from_scores(&values)))
            .collect();

        Self { folds, summary }
    }

    /// Summary for one metric
    pub fn metric(&self, name: &str) -> Option<&MetricSummary> {
        self.summary.get(name)
    }
}

impl fmt::Display for CvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fold in &self.folds {
            write!(f, "Fold {} ({} test subjects):", fold.fold, fold.test_subjects.len())?;
            for (name, value) in &fold.metrics {
                write!(f, " {name}={value:.4}")?;
            }
            writeln!(f)?;
            for (subject, metrics) in &fold.subject_metrics {
                write!(f, "  {subject}:")?;
                for (name, value) in metrics {
                    write!(f, " {name}={value:.4}")?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f, "Summary over {} folds:", self.folds.len())?;
        for (name, summary) in &self.summary {
            writeln!(f, "  {name}: {:.4} ± {:.4}", summary.mean, summary.std)?;
        }
        Ok(())
    }
}
