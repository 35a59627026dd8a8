//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ExperimentConfig, InfoArgs, OutputFormat};

/// Format the experiment section as text
pub fn format_experiment_info(config: &ExperimentConfig) -> String {
    let experiment = &config.experiment;
    let mut lines = vec![
        format!("Strategy: {}", experiment.strategy),
        format!("Folds: {}", experiment.folds),
    ];
    if let Some(seed) = experiment.seed {
        lines.push(format!("Shuffle seed: {seed}"));
    }
    if experiment.per_subject_eval {
        lines.push("Per-subject evaluation: enabled".to_string());
    }
    lines.push(format!("Epochs: {}", experiment.training.epochs));
    lines.push(format!("Batch size: {}", experiment.training.batch_size));
    lines.push(format!("Learning rate: {}", experiment.training.lr));
    lines.join("\n")
}

/// Format the selected datasets as text
pub fn format_dataset_info(config: &ExperimentConfig) -> String {
    let mut lines = Vec::new();
    for (key, spec) in config.selected_datasets() {
        lines.push(format!("Dataset: {}", spec.display_name(key)));
        lines.push(format!("  Toplevel: {}", spec.toplevel.display()));
        let kind = if spec.is_epoched() { "epoched" } else { "raw" };
        lines.push(format!("  Trials: {kind}, tlen={}s", spec.tlen));
        if let Some(events) = &spec.events {
            let events: Vec<String> = events.iter().map(ToString::to_string).collect();
            lines.push(format!("  Events: {}", events.join(", ")));
        }
        if !spec.exclude_people.is_empty() {
            lines.push(format!("  Excluded people: {}", spec.exclude_people.len()));
        }
        if !spec.exclude_sessions.is_empty() {
            lines.push(format!("  Excluded sessions: {}", spec.exclude_sessions.len()));
        }
    }
    lines.join("\n")
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Experiment Info:");
            println!();
            println!("{}", format_experiment_info(&config));
            println!();
            println!("{}", format_dataset_info(&config));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
