//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::cv::CvStrategy;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn arb_valid_config() -> impl Strategy<Value = ExperimentConfig> {
    (
        2usize..20,    // folds
        1usize..256,   // batch_size
        1e-6f32..1.0,  // lr
        1usize..100,   // epochs
        0.1f64..30.0,  // tlen
    )
        .prop_map(|(folds, batch_size, lr, epochs, tlen)| {
            let mut datasets = BTreeMap::new();
            datasets.insert("ds".to_string(), DatasetSpec::new("/data/ds", tlen));
            ExperimentConfig {
                experiment: ExperimentSpec {
                    datasets: vec!["ds".to_string()],
                    folds,
                    strategy: CvStrategy::Lmso,
                    seed: None,
                    per_subject_eval: false,
                    training: TrainingParams { epochs, batch_size, lr },
                },
                datasets,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_batch_size_fails(config in arb_valid_config()) {
        let mut config = config;
        config.experiment.training.batch_size = 0;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn prop_lr_above_one_fails(config in arb_valid_config(), lr in 1.0001f32..100.0) {
        let mut config = config;
        config.experiment.training.lr = lr;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidLearningRate(_))
        ));
    }

    #[test]
    fn prop_loso_accepts_any_positive_folds(config in arb_valid_config(), folds in 1usize..50) {
        let mut config = config;
        config.experiment.strategy = CvStrategy::Loso;
        config.experiment.folds = folds;
        prop_assert!(validate_config(&config).is_ok());
    }
}
