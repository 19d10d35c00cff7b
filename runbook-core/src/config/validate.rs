//! Configuration validation rules.

use super::schema::Config;
use crate::utils::{is_plain_name, TMP_SUFFIX};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate configuration and return aggregated validation errors.
pub fn validate_config(config: &Config) -> crate::Result<()> {
    let mut errors = Vec::new();

    if config.paths.workspace.trim().is_empty() {
        errors.push("paths.workspace must not be empty".to_string());
    }
    if config.paths.directives_dir.trim().is_empty() {
        errors.push("paths.directives_dir must not be empty".to_string());
    }
    if config.paths.memory_dir.trim().is_empty() {
        errors.push("paths.memory_dir must not be empty".to_string());
    }

    if !is_plain_name(&config.memory.solutions_file) {
        errors.push("memory.solutions_file must be a plain file name".to_string());
    }
    if !is_plain_name(&config.memory.patterns_file) {
        errors.push("memory.patterns_file must be a plain file name".to_string());
    }
    for (key, name) in [
        ("memory.solutions_file", &config.memory.solutions_file),
        ("memory.patterns_file", &config.memory.patterns_file),
    ] {
        if name.ends_with(TMP_SUFFIX) {
            errors.push(format!("{} must not end in {}", key, TMP_SUFFIX));
        }
    }
    if config.memory.solutions_file == config.memory.patterns_file {
        errors.push("memory.solutions_file and memory.patterns_file must differ".to_string());
    }

    let header = &config.memory.solutions_header;
    if header.trim().is_empty() {
        errors.push("memory.solutions_header must not be empty".to_string());
    } else if header.contains('\n') || header.contains('\r') {
        errors.push("memory.solutions_header must be a single line".to_string());
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        errors.push(format!(
            "logging.level must be one of {}",
            LOG_LEVELS.join(", ")
        ));
    }
    let format = config.logging.format.to_ascii_lowercase();
    if format != "text" && format != "json" {
        errors.push("logging.format must be 'text' or 'json'".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Validation(errors.join("; ")))
    }
}
