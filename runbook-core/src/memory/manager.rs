//! Solution memory store backed by a single Markdown file

use super::search::{search_lines, SearchHit};
use super::storage::{store_template, SolutionEntry};
use crate::config::{Config, MemoryConfig};
use crate::utils::{read_optional, write_atomic};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Manages the solutions log and the read-only patterns file
#[derive(Debug)]
pub struct MemoryStore {
    /// Memory directory
    memory_dir: PathBuf,
    /// Solutions log path
    solutions_path: PathBuf,
    /// Recurring patterns file path
    patterns_path: PathBuf,
    /// Section header entries are inserted under
    header: String,
    /// Context lines on each side of a search match
    context_lines: usize,
}

impl MemoryStore {
    /// Create a store rooted at `memory_dir`
    pub fn new<P: AsRef<Path>>(memory_dir: P, config: &MemoryConfig) -> Self {
        let memory_dir = memory_dir.as_ref().to_path_buf();
        Self {
            solutions_path: memory_dir.join(&config.solutions_file),
            patterns_path: memory_dir.join(&config.patterns_file),
            header: config.solutions_header.clone(),
            context_lines: config.context_lines,
            memory_dir,
        }
    }

    /// Create a store from the resolved runbook configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.memory_dir(), &config.memory)
    }

    /// Get the memory directory path
    pub fn memory_dir(&self) -> &Path {
        &self.memory_dir
    }

    pub fn solutions_path(&self) -> &Path {
        &self.solutions_path
    }

    pub fn patterns_path(&self) -> &Path {
        &self.patterns_path
    }

    /// Load the solutions log; `None` when it is missing or empty
    pub fn load(&self) -> crate::Result<Option<String>> {
        Ok(read_optional(&self.solutions_path)?.filter(|c| !c.is_empty()))
    }

    /// Load the patterns file; `None` when it is missing or empty
    pub fn load_patterns(&self) -> crate::Result<Option<String>> {
        Ok(read_optional(&self.patterns_path)?.filter(|c| !c.is_empty()))
    }

    /// Record a new solution dated today and return it
    pub fn append_solution(
        &self,
        problem: &str,
        solution: &str,
        tags: &str,
    ) -> crate::Result<SolutionEntry> {
        let entry = SolutionEntry::new(problem, solution, tags);
        self.append_entry(&entry)?;
        Ok(entry)
    }

    /// Insert an entry directly below the solutions header
    ///
    /// The whole file is rewritten; concurrent writers may lose updates.
    pub fn append_entry(&self, entry: &SolutionEntry) -> crate::Result<()> {
        std::fs::create_dir_all(&self.memory_dir)?;

        let content = self
            .load()?
            .unwrap_or_else(|| store_template(&self.header));
        let updated = insert_entry(&content, &self.header, &entry.to_markdown());

        write_atomic(&self.solutions_path, &updated)?;
        info!(
            path = %self.solutions_path.display(),
            date = %entry.date,
            "solution recorded"
        );
        Ok(())
    }

    /// Search the log; `None` when the log is missing or empty
    pub fn search(&self, query: &str) -> crate::Result<Option<Vec<SearchHit>>> {
        let Some(content) = self.load()? else {
            return Ok(None);
        };
        let hits = search_lines(&content, query, self.context_lines);
        debug!(query, matches = hits.len(), "memory search finished");
        Ok(Some(hits))
    }

    /// Parse every entry in the log, most recent first under the header
    pub fn entries(&self) -> crate::Result<Vec<SolutionEntry>> {
        Ok(self
            .load()?
            .map(|content| SolutionEntry::parse_all(&content))
            .unwrap_or_default())
    }
}

/// Place `block` right after the first `header` line of `content`.
///
/// Without a header line the block goes to the end of the content.
pub fn insert_entry(content: &str, header: &str, block: &str) -> String {
    let anchor = format!("{}\n", header);
    let mut updated = String::with_capacity(content.len() + block.len() + 1);

    if let Some(pos) = content.find(&anchor) {
        let split = pos + anchor.len();
        updated.push_str(&content[..split]);
        updated.push_str(block);
        updated.push_str(&content[split..]);
        return updated;
    }

    debug!(header, "solutions header not found, appending at end");
    updated.push_str(content);
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(block);
    updated
}
