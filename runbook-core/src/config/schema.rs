//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::utils::{expand_home, resolve_path};

/// Root configuration for runbook
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Directory layout
    #[serde(default)]
    pub paths: PathsConfig,
    /// Memory store configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Absolute or cwd-relative workspace directory
    pub fn workspace_dir(&self) -> PathBuf {
        expand_home(&self.paths.workspace)
    }

    /// Directory holding one Markdown file per directive
    pub fn directives_dir(&self) -> PathBuf {
        resolve_path(&self.workspace_dir(), &self.paths.directives_dir)
    }

    /// Directory holding the solutions log and the patterns file
    pub fn memory_dir(&self) -> PathBuf {
        resolve_path(&self.workspace_dir(), &self.paths.memory_dir)
    }
}

/// Directory layout, relative entries resolve against `workspace`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_workspace")]
    pub workspace: String,
    #[serde(default = "default_directives_dir")]
    pub directives_dir: String,
    #[serde(default = "default_memory_dir")]
    pub memory_dir: String,
}

fn default_workspace() -> String {
    ".".to_string()
}

fn default_directives_dir() -> String {
    "directives".to_string()
}

fn default_memory_dir() -> String {
    "memory".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            directives_dir: default_directives_dir(),
            memory_dir: default_memory_dir(),
        }
    }
}

/// Memory store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// File name of the solutions log inside the memory directory
    #[serde(default = "default_solutions_file")]
    pub solutions_file: String,
    /// File name of the recurring patterns notes inside the memory directory
    #[serde(default = "default_patterns_file")]
    pub patterns_file: String,
    /// Section header new entries are inserted under
    #[serde(default = "default_solutions_header")]
    pub solutions_header: String,
    /// Lines of context printed on each side of a search match
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

fn default_solutions_file() -> String {
    "solutions.md".to_string()
}

fn default_patterns_file() -> String {
    "patterns.md".to_string()
}

fn default_solutions_header() -> String {
    "## Saved Solutions".to_string()
}

fn default_context_lines() -> usize {
    2
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            solutions_file: default_solutions_file(),
            patterns_file: default_patterns_file(),
            solutions_header: default_solutions_header(),
            context_lines: default_context_lines(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub dir: Option<String>,
    /// Module-specific overrides
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            dir: None,
            overrides: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.directives_dir(), Path::new(".").join("directives"));
        assert_eq!(config.memory_dir(), Path::new(".").join("memory"));
        assert_eq!(config.memory.solutions_file, "solutions.md");
        assert_eq!(config.memory.patterns_file, "patterns.md");
        assert_eq!(config.memory.context_lines, 2);
    }

    #[test]
    fn test_absolute_subdirs_ignore_workspace() {
        let mut config = Config::default();
        config.paths.workspace = "/srv/work".to_string();
        config.paths.memory_dir = "/var/lib/runbook".to_string();
        assert_eq!(config.directives_dir(), PathBuf::from("/srv/work/directives"));
        assert_eq!(config.memory_dir(), PathBuf::from("/var/lib/runbook"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"memory":{"context_lines":4}}"#).unwrap();
        assert_eq!(config.memory.context_lines, 4);
        assert_eq!(config.memory.solutions_header, "## Saved Solutions");
        assert_eq!(config.paths.workspace, ".");
        assert_eq!(config.logging.level, "warn");
    }
}
