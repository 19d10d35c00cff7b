//! Logging setup for the runbook tools
//!
//! Command output owns stdout, so log events are written to stderr and,
//! when `logging.dir` is configured, to a daily rolling file.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::schema::LoggingConfig;

const LOG_FILE_PREFIX: &str = "runbook.log";
const LOG_RETENTION_DAYS: u64 = 7;

/// Build the level filter from `RUST_LOG`, falling back to the config
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    for (module, level) in &config.overrides {
        if let Ok(directive) = format!("{}={}", module, level).parse() {
            filter = filter.add_directive(directive);
        } else {
            eprintln!("Invalid log directive: {}={}", module, level);
        }
    }

    filter
}

/// Initialize the logging system
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. It is `None` when no log directory is set.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = build_filter(config);

    let format_str = std::env::var("LOG_FORMAT").unwrap_or_else(|_| config.format.clone());
    let is_json = format_str.eq_ignore_ascii_case("json");

    let stderr_layer = if is_json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = match config.dir.as_deref() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = if is_json {
                fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .boxed()
            } else {
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // A second init in the same process (tests) keeps the first subscriber.
    let _ = Registry::default()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    if let Some(dir) = config.dir.as_deref() {
        if let Err(e) = cleanup_old_logs(Path::new(dir), LOG_RETENTION_DAYS) {
            eprintln!("Failed to clean up old logs: {}", e);
        }
    }

    guard
}

/// Remove rolled log files older than `days` days
fn cleanup_old_logs(dir: &Path, days: u64) -> std::io::Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    let now = std::time::SystemTime::now();
    let threshold = std::time::Duration::from_secs(days * 24 * 3600);

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_log = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
        if !is_log {
            continue;
        }

        let age = entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .and_then(|modified| now.duration_since(modified).ok());
        if age.is_some_and(|age| age > threshold) {
            if let Err(e) = std::fs::remove_file(&path) {
                eprintln!("Failed to remove old log file {:?}: {}", path, e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_keeps_fresh_logs() {
        let temp_dir = TempDir::new().unwrap();
        let fresh = temp_dir.path().join("runbook.log.2026-10-18");
        let unrelated = temp_dir.path().join("notes.txt");
        std::fs::write(&fresh, "recent").unwrap();
        std::fs::write(&unrelated, "keep").unwrap();

        cleanup_old_logs(temp_dir.path(), 7).unwrap();

        assert!(fresh.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        assert!(cleanup_old_logs(&temp_dir.path().join("absent"), 7).is_ok());
    }

    #[test]
    fn test_build_filter_accepts_overrides() {
        let mut config = LoggingConfig::default();
        config
            .overrides
            .insert("runbook_core::memory".to_string(), "debug".to_string());
        let filter = build_filter(&config);
        assert!(filter.to_string().contains("runbook_core::memory=debug"));
    }
}
