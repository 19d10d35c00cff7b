//! Solution entry format and store template

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const ENTRY_HEADING: &str = "### Solution - ";
const PROBLEM_LABEL: &str = "**Problem:**";
const SOLUTION_LABEL: &str = "**Solution:**";
const TAGS_LABEL: &str = "**Tags:**";
const SEPARATOR: &str = "---";

/// Build the initial content of a new solutions store
pub fn store_template(header: &str) -> String {
    format!(
        "# Persistent Solution Memory\n\n\
         ## How to use\n\
         Save solutions, patterns and lessons learned that can be reused later.\n\n\
         ---\n\n\
         {}\n",
        header
    )
}

/// A dated, tagged record of a problem and its resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionEntry {
    /// Creation date
    pub date: NaiveDate,
    /// What went wrong
    pub problem: String,
    /// How it was resolved
    pub solution: String,
    /// Free-form tags, e.g. `#api #performance`
    pub tags: String,
}

impl SolutionEntry {
    /// Create an entry dated today (local time)
    pub fn new(
        problem: impl Into<String>,
        solution: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self::dated(Local::now().date_naive(), problem, solution, tags)
    }

    /// Create an entry for a specific date
    pub fn dated(
        date: NaiveDate,
        problem: impl Into<String>,
        solution: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            date,
            problem: problem.into(),
            solution: solution.into(),
            tags: tags.into(),
        }
    }

    /// Render the entry as the Markdown block stored in the log
    pub fn to_markdown(&self) -> String {
        format!(
            "{}{}\n\n{} {}\n\n{} {}\n\n{} {}\n\n{}\n\n",
            ENTRY_HEADING,
            self.date.format("%Y-%m-%d"),
            PROBLEM_LABEL,
            self.problem,
            SOLUTION_LABEL,
            self.solution,
            TAGS_LABEL,
            self.tags,
            SEPARATOR,
        )
    }

    /// Extract every well-formed entry block from store content, in file order
    ///
    /// Blocks whose heading carries no valid `YYYY-MM-DD` date are skipped.
    pub fn parse_all(content: &str) -> Vec<SolutionEntry> {
        let mut entries = Vec::new();
        let mut current: Option<EntryBuilder> = None;

        for raw in content.split('\n') {
            let line = raw.trim_end_matches('\r');

            if let Some(rest) = line.strip_prefix(ENTRY_HEADING) {
                if let Some(builder) = current.take() {
                    entries.push(builder.finish());
                }
                current = NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d")
                    .ok()
                    .map(EntryBuilder::new);
                continue;
            }

            let Some(builder) = current.as_mut() else {
                continue;
            };

            if line.trim() == SEPARATOR || line.starts_with("## ") || line.starts_with("# ") {
                if let Some(builder) = current.take() {
                    entries.push(builder.finish());
                }
            } else if let Some(rest) = line.strip_prefix(PROBLEM_LABEL) {
                builder.start(Field::Problem, rest);
            } else if let Some(rest) = line.strip_prefix(SOLUTION_LABEL) {
                builder.start(Field::Solution, rest);
            } else if let Some(rest) = line.strip_prefix(TAGS_LABEL) {
                builder.start(Field::Tags, rest);
            } else {
                builder.continue_field(line);
            }
        }

        if let Some(builder) = current.take() {
            entries.push(builder.finish());
        }
        entries
    }
}

#[derive(Clone, Copy)]
enum Field {
    Problem,
    Solution,
    Tags,
}

struct EntryBuilder {
    date: NaiveDate,
    problem: Vec<String>,
    solution: Vec<String>,
    tags: Vec<String>,
    field: Option<Field>,
}

impl EntryBuilder {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            problem: Vec::new(),
            solution: Vec::new(),
            tags: Vec::new(),
            field: None,
        }
    }

    fn lines_mut(&mut self, field: Field) -> &mut Vec<String> {
        match field {
            Field::Problem => &mut self.problem,
            Field::Solution => &mut self.solution,
            Field::Tags => &mut self.tags,
        }
    }

    fn start(&mut self, field: Field, first: &str) {
        self.field = Some(field);
        let first = first.strip_prefix(' ').unwrap_or(first).to_string();
        let lines = self.lines_mut(field);
        lines.clear();
        lines.push(first);
    }

    fn continue_field(&mut self, line: &str) {
        if let Some(field) = self.field {
            self.lines_mut(field).push(line.to_string());
        }
    }

    fn finish(self) -> SolutionEntry {
        fn join(lines: Vec<String>) -> String {
            lines.join("\n").trim_end().to_string()
        }
        SolutionEntry {
            date: self.date,
            problem: join(self.problem),
            solution: join(self.solution),
            tags: join(self.tags),
        }
    }
}
