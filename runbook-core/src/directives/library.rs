//! Directive lookup in a directory of Markdown files

use crate::config::Config;
use crate::utils::{is_plain_name, read_optional};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DIRECTIVE_EXTENSION: &str = ".md";

/// A directive loaded from disk
#[derive(Debug, Clone)]
pub struct Directive {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// Read-only view over the directives directory
#[derive(Debug)]
pub struct DirectiveLibrary {
    dir: PathBuf,
}

impl DirectiveLibrary {
    /// Create a library over `dir`
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Create a library from the resolved runbook configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.directives_dir())
    }

    /// Get the directives directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List directive names, sorted
    ///
    /// # Returns
    ///
    /// `None` if the directives directory does not exist
    pub fn list(&self) -> crate::Result<Option<Vec<String>>> {
        if !self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "directives directory missing");
            return Ok(None);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if let Some(stem) = name.strip_suffix(DIRECTIVE_EXTENSION) {
                    if !stem.is_empty() {
                        names.push(stem.to_string());
                    }
                }
            }
        }

        names.sort();
        Ok(Some(names))
    }

    /// Read a directive by name
    ///
    /// # Returns
    ///
    /// `None` if no `<name>.md` exists in the directory. Names that would
    /// leave the directory are treated as missing.
    pub fn read(&self, name: &str) -> crate::Result<Option<Directive>> {
        if !is_plain_name(name) {
            debug!(name, "rejecting directive name with path components");
            return Ok(None);
        }

        let path = self.dir.join(format!("{}{}", name, DIRECTIVE_EXTENSION));
        Ok(read_optional(&path)?.map(|content| Directive {
            name: name.to_string(),
            path,
            content,
        }))
    }
}
