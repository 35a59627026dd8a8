//! Tests for configuration validation

use super::*;
use crate::config::schema::*;
use crate::cv::CvStrategy;
use std::collections::BTreeMap;

fn make_config() -> ExperimentConfig {
    let mut datasets = BTreeMap::new();
    datasets.insert("mmidb".to_string(), DatasetSpec::new("/data/eegmmidb", 6.0));
    ExperimentConfig {
        experiment: ExperimentSpec {
            datasets: vec!["mmidb".to_string()],
            folds: 5,
            strategy: CvStrategy::Lmso,
            seed: None,
            per_subject_eval: false,
            training: TrainingParams::default(),
        },
        datasets,
    }
}

fn dataset_mut(config: &mut ExperimentConfig) -> &mut DatasetSpec {
    config.datasets.get_mut("mmidb").unwrap()
}

#[test]
fn test_valid_config_passes() {
    assert!(validate_config(&make_config()).is_ok());
}

#[test]
fn test_no_datasets_fails() {
    let mut config = make_config();
    config.experiment.datasets.clear();
    assert!(matches!(validate_config(&config), Err(ValidationError::NoDatasets)));
}

#[test]
fn test_undefined_dataset_fails() {
    let mut config = make_config();
    config.experiment.datasets.push("bci_iv_2a".to_string());
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::UndefinedDataset(name)) if name == "bci_iv_2a"
    ));
}

#[test]
fn test_single_fold_lmso_fails() {
    let mut config = make_config();
    config.experiment.folds = 1;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidFolds { folds: 1, min: 2, .. }));
    assert!(err.to_string().contains("lmso"));
}

#[test]
fn test_single_fold_loso_passes() {
    let mut config = make_config();
    config.experiment.folds = 1;
    config.experiment.strategy = CvStrategy::Loso;
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_zero_epochs_fails() {
    let mut config = make_config();
    config.experiment.training.epochs = 0;
    assert!(matches!(validate_config(&config), Err(ValidationError::InvalidEpochs(0))));
}

#[test]
fn test_nan_learning_rate_fails() {
    let mut config = make_config();
    config.experiment.training.lr = f32::NAN;
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidLearningRate(_))
    ));
}

#[test]
fn test_negative_tlen_fails() {
    let mut config = make_config();
    dataset_mut(&mut config).tlen = -1.0;
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidTrialLength { .. })
    ));
}

#[test]
fn test_zero_decimate_and_stride_fail() {
    let mut config = make_config();
    dataset_mut(&mut config).decimate = 0;
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidDecimate { value: 0, .. })
    ));

    let mut config = make_config();
    dataset_mut(&mut config).stride = 0;
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidStride { value: 0, .. })
    ));
}

#[test]
fn test_extension_without_dot_fails() {
    let mut config = make_config();
    dataset_mut(&mut config).file_extensions = vec!["edf".to_string()];
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidExtension { extension, .. }) if extension == "edf"
    ));
}

#[test]
fn test_no_extensions_fails() {
    let mut config = make_config();
    dataset_mut(&mut config).file_extensions.clear();
    assert!(matches!(validate_config(&config), Err(ValidationError::NoExtensions(_))));
}

#[test]
fn test_empty_events_fails() {
    let mut config = make_config();
    dataset_mut(&mut config).events = Some(vec![]);
    assert!(matches!(validate_config(&config), Err(ValidationError::EmptyEvents(_))));
}

#[test]
fn test_inverted_bandpass_fails() {
    let mut config = make_config();
    dataset_mut(&mut config).bandpass = Some((40.0, 1.0));
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidBandpass { .. })
    ));
}

#[test]
fn test_unlisted_dataset_not_validated() {
    let mut config = make_config();
    config
        .datasets
        .insert("unused".to_string(), DatasetSpec::new("/nowhere", -1.0));
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validate_paths() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = make_config();
    dataset_mut(&mut config).toplevel = dir.path().to_path_buf();
    assert!(validate_paths(&config).is_ok());

    dataset_mut(&mut config).toplevel = dir.path().join("missing");
    assert!(matches!(
        validate_paths(&config),
        Err(ValidationError::ToplevelNotFound { dataset, .. }) if dataset == "mmidb"
    ));
}
