//! Folds command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, validate_config, FoldsArgs, OutputFormat};
use crate::cv::Split;
use crate::run::plan_splits;
use crate::subject::SubjectId;
use std::fs;

/// Parse a subject list: one id per line, blank lines and `#` comments skipped
pub fn parse_subject_list(text: &str) -> Vec<SubjectId> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(SubjectId::from)
        .collect()
}

fn read_subjects(args: &FoldsArgs) -> Result<Vec<SubjectId>, String> {
    if let Some(path) = &args.subjects_file {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read subjects file {}: {e}", path.display()))?;
        return Ok(parse_subject_list(&text));
    }
    if args.subjects.is_empty() {
        return Err("No subjects given: use --subjects or --subjects-file".to_string());
    }
    Ok(args.subjects.iter().map(|s| SubjectId::from(s.as_str())).collect())
}

/// Render splits as text, one block per fold
pub fn format_splits(splits: &[Split]) -> String {
    splits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_folds(args: FoldsArgs, level: LogLevel) -> Result<(), String> {
    let mut config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut config, &args);
    validate_config(&config).map_err(|e| format!("Validation failed: {e}"))?;

    let subjects = read_subjects(&args)?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Planning {} over {} subjects",
            config.experiment.strategy,
            subjects.len()
        ),
    );

    let splits = plan_splits(subjects, &config.experiment).map_err(|e| format!("{e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(
                level,
                LogLevel::Normal,
                &format!("{} folds ({})", splits.len(), config.experiment.strategy),
            );
            println!("{}", format_splits(&splits));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&splits)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&splits)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
