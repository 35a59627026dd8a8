//! YAML schema definitions for declarative cross-validation experiments
//!
//! Every struct rejects unknown keys: a misspelt hyperparameter is a parse
//! error, not a silently ignored entry.

use crate::cv::CvStrategy;
use crate::subject::{RecordingCollection, DEFAULT_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Complete experiment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Cross-validation and training settings
    pub experiment: ExperimentSpec,

    /// Dataset definitions, keyed by the names listed in `experiment.datasets`
    #[serde(default)]
    pub datasets: BTreeMap<String, DatasetSpec>,
}

impl ExperimentConfig {
    /// Datasets listed by the experiment, in listing order.
    ///
    /// Names without a definition are skipped; `validate_config` reports them.
    pub fn selected_datasets(&self) -> impl Iterator<Item = (&str, &DatasetSpec)> {
        self.experiment
            .datasets
            .iter()
            .filter_map(|name| self.datasets.get(name).map(|spec| (name.as_str(), spec)))
    }
}

/// Cross-validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentSpec {
    /// Names of the datasets to run on
    pub datasets: Vec<String>,

    /// Number of folds (ignored by LOSO)
    #[serde(default = "default_folds")]
    pub folds: usize,

    /// Hold-out strategy
    #[serde(default)]
    pub strategy: CvStrategy,

    /// Seed for shuffling subjects before partitioning; no shuffle when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Also evaluate each test subject on its own after the fold-level test
    #[serde(default)]
    pub per_subject_eval: bool,

    /// Training hyperparameters
    #[serde(default)]
    pub training: TrainingParams,
}

fn default_folds() -> usize {
    10
}

/// Training hyperparameters handed to the classification process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainingParams {
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    #[serde(default = "default_lr")]
    pub lr: f32,
}

fn default_epochs() -> usize {
    10
}

fn default_batch_size() -> usize {
    32
}

fn default_lr() -> f32 {
    0.001
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            epochs: default_epochs(),
            batch_size: default_batch_size(),
            lr: default_lr(),
        }
    }
}

/// Event label, either a numeric trigger code or an annotation name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventLabel {
    Code(i64),
    Name(String),
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventLabel::Code(code) => write!(f, "{code}"),
            EventLabel::Name(name) => f.write_str(name),
        }
    }
}

/// One dataset entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSpec {
    /// Root directory, laid out as `<toplevel>/[...]/<subject>/<session>.<ext>`
    pub toplevel: PathBuf,

    /// Trial (or raw window) length in seconds
    pub tlen: f64,

    /// Trial start relative to the event; raw windows when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmin: Option<f64>,

    /// Display name, defaults to the dataset key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventLabel>>,

    /// Channel names or channel types to keep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picks: Option<Vec<String>>,

    #[serde(default = "default_one")]
    pub decimate: usize,

    /// Step between raw windows, in samples
    #[serde(default = "default_one")]
    pub stride: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<(Option<f64>, Option<f64>)>,

    /// Band-pass filter edges in Hz
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandpass: Option<(f64, f64)>,

    #[serde(default)]
    pub drop_bad: bool,

    #[serde(default, rename = "max", skip_serializing_if = "Option::is_none")]
    pub data_max: Option<f64>,

    #[serde(default, rename = "min", skip_serializing_if = "Option::is_none")]
    pub data_min: Option<f64>,

    #[serde(default = "default_extensions")]
    pub file_extensions: Vec<String>,

    #[serde(default)]
    pub exclude_people: Vec<String>,

    #[serde(default)]
    pub exclude_sessions: Vec<String>,
}

fn default_one() -> usize {
    1
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

impl DatasetSpec {
    /// Create a spec with defaults for everything but the required fields
    pub fn new(toplevel: impl Into<PathBuf>, tlen: f64) -> Self {
        Self {
            toplevel: toplevel.into(),
            tlen,
            tmin: None,
            name: None,
            events: None,
            picks: None,
            decimate: 1,
            stride: 1,
            baseline: None,
            bandpass: None,
            drop_bad: false,
            data_max: None,
            data_min: None,
            file_extensions: default_extensions(),
            exclude_people: Vec::new(),
            exclude_sessions: Vec::new(),
        }
    }

    /// Epoched trials around events when `tmin` is set, raw windows otherwise
    pub fn is_epoched(&self) -> bool {
        self.tmin.is_some()
    }

    /// Configured name, falling back to the dataset key
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }

    /// Group already-listed session files into subjects, applying the
    /// extension filter and the exclusion lists.
    pub fn build_collection<I, P>(&self, session_paths: I) -> RecordingCollection
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let collection = RecordingCollection::from_session_paths_with_extensions(
            session_paths,
            &self.file_extensions,
        )
        .with_exclusions(&self.exclude_people, &self.exclude_sessions);

        tracing::info!(
            toplevel = %self.toplevel.display(),
            subjects = collection.len(),
            recordings = collection.recording_count(),
            epoched = self.is_epoched(),
            "built recording collection"
        );
        collection
    }
}
