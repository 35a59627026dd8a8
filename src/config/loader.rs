//! Load experiment configurations from YAML

use super::schema::ExperimentConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read and parse a YAML experiment configuration.
///
/// Parsing only; call [`validate_config`](super::validate_config) before use.
///
/// # Example
///
/// ```no_run
/// use pliegue::config::{load_config, validate_config};
///
/// let config = load_config("experiment.yaml")?;
/// validate_config(&config)?;
/// # Ok::<(), pliegue::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    let config = parse_config(&yaml)?;
    tracing::debug!(
        path = %path.display(),
        datasets = config.experiment.datasets.len(),
        "loaded experiment config"
    );
    Ok(config)
}

/// Parse a YAML experiment configuration from a string
pub fn parse_config(yaml: &str) -> Result<ExperimentConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EventLabel;
    use crate::cv::CvStrategy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOTOR_IMAGERY: &str = r#"
experiment:
  datasets: [mmidb]
  folds: 5
  strategy: lmso
  seed: 7
  per_subject_eval: true
  training:
    epochs: 7
    batch_size: 4
    lr: 0.0001

datasets:
  mmidb:
    name: "Physionet MMIDB"
    toplevel: /data/eegmmidb
    tmin: 0
    tlen: 6
    events: [T1, T2]
    exclude_people: [S088, S090, S092, S100]
    file_extensions: [.edf]
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(MOTOR_IMAGERY).unwrap();

        assert_eq!(config.experiment.folds, 5);
        assert_eq!(config.experiment.strategy, CvStrategy::Lmso);
        assert_eq!(config.experiment.seed, Some(7));
        assert!(config.experiment.per_subject_eval);
        assert_eq!(config.experiment.training.epochs, 7);
        assert_eq!(config.experiment.training.batch_size, 4);

        let mmidb = &config.datasets["mmidb"];
        assert!(mmidb.is_epoched());
        assert_eq!(mmidb.display_name("mmidb"), "Physionet MMIDB");
        assert_eq!(
            mmidb.events.as_deref(),
            Some(&[EventLabel::Name("T1".into()), EventLabel::Name("T2".into())][..])
        );
        assert_eq!(mmidb.exclude_people.len(), 4);
        assert_eq!(mmidb.decimate, 1);
    }

    #[test]
    fn test_defaults_applied() {
        let config = parse_config(
            "experiment:\n  datasets: [ds]\ndatasets:\n  ds:\n    toplevel: /x\n    tlen: 2.5\n",
        )
        .unwrap();

        assert_eq!(config.experiment.folds, 10);
        assert_eq!(config.experiment.strategy, CvStrategy::Lmso);
        assert_eq!(config.experiment.seed, None);
        assert_eq!(config.experiment.training.batch_size, 32);
        let ds = &config.datasets["ds"];
        assert!(!ds.is_epoched());
        assert_eq!(ds.file_extensions, vec![".edf", ".fif"]);
    }

    #[test]
    fn test_numeric_events() {
        let config = parse_config(
            "experiment:\n  datasets: [ds]\ndatasets:\n  ds:\n    toplevel: /x\n    tlen: 4\n    events: [769, 770]\n",
        )
        .unwrap();
        let events = config.datasets["ds"].events.clone().unwrap();
        assert_eq!(events, vec![EventLabel::Code(769), EventLabel::Code(770)]);
        assert_eq!(events[0].to_string(), "769");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_config(
            "experiment:\n  datasets: [ds]\n  training:\n    epochs: 3\n    momentum: 0.9\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().contains("momentum"));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        assert!(parse_config("experiment:\n  datasets: [ds]\nextra: 1\n").is_err());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let result =
            parse_config("experiment:\n  datasets: [ds]\ndatasets:\n  ds:\n    toplevel: /x\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MOTOR_IMAGERY.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.experiment.datasets, vec!["mmidb"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
