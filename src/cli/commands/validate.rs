//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, validate_config, validate_paths, ValidateArgs};

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    validate_config(&config).map_err(|e| format!("Validation failed: {e}"))?;

    if args.check_paths {
        validate_paths(&config).map_err(|e| format!("Validation failed: {e}"))?;
        log(level, LogLevel::Verbose, "Dataset directories exist");
    }

    log(level, LogLevel::Normal, "Configuration is valid");
    Ok(())
}
