//! Human-readable rendering of command results
//!
//! Every function writes to the given writer so the binaries can print to
//! stdout and tests can capture the exact text.

use console::style;
use runbook_core::directives::Directive;
use runbook_core::memory::{SearchHit, SolutionEntry};
use std::io::{self, Write};
use std::path::Path;

const MATCH_MARKER: &str = ">>>";
const CONTEXT_MARKER: &str = "   ";

pub fn directive_usage(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "Usage: directive-runner <command> [args]")?;
    writeln!(w, "Commands:")?;
    writeln!(w, "  list              - List available directives")?;
    writeln!(w, "  <name>            - Show a directive")
}

/// Print directive names, or report a missing directives directory
pub fn directive_list(
    w: &mut impl Write,
    names: Option<&[String]>,
    dir: &Path,
) -> io::Result<()> {
    writeln!(w, "{}", style("Available directives:").bold())?;
    writeln!(w, "{}", "-".repeat(40))?;

    match names {
        None => writeln!(w, "Directives directory not found: {}", dir.display()),
        Some([]) => writeln!(w, "No directives yet."),
        Some(names) => {
            for name in names {
                writeln!(w, "  - {}", name)?;
            }
            Ok(())
        }
    }
}

pub fn directive_show(
    w: &mut impl Write,
    name: &str,
    directive: Option<&Directive>,
) -> io::Result<()> {
    match directive {
        Some(directive) => {
            writeln!(w)?;
            writeln!(
                w,
                "{}",
                style(format!("=== DIRECTIVE: {} ===", directive.name)).cyan().bold()
            )?;
            writeln!(w)?;
            writeln!(w, "{}", directive.content)
        }
        None => {
            writeln!(w, "Directive '{}' not found.", name)?;
            writeln!(w)?;
            writeln!(w, "Use: directive-runner list")?;
            writeln!(w, "     directive-runner <name>")
        }
    }
}

pub fn memory_usage(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "Usage: memory-manager <command> [args]")?;
    writeln!(w, "Commands:")?;
    writeln!(w, "  add <problem> <solution> <tags>")?;
    writeln!(w, "  search <term>")?;
    writeln!(w, "  list [--summary]")?;
    writeln!(w, "  patterns")
}

pub fn add_usage(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "Usage: memory-manager add <problem> <solution> <tags>")?;
    writeln!(
        w,
        "Example: memory-manager add 'Slow API' 'Added Redis cache' '#api #performance'"
    )
}

pub fn search_usage(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "Usage: memory-manager search <term>")
}

pub fn unknown_command(w: &mut impl Write, command: &str) -> io::Result<()> {
    writeln!(w, "Unknown command: {}", command)
}

pub fn solution_added(w: &mut impl Write, entry: &SolutionEntry) -> io::Result<()> {
    writeln!(w, "{} Solution added: {}", style("✓").green(), entry.tags)
}

/// Print every hit with its context window, marking the matching line
pub fn search_results(
    w: &mut impl Write,
    query: &str,
    hits: Option<&[SearchHit]>,
) -> io::Result<()> {
    let Some(hits) = hits else {
        return writeln!(w, "Memory is empty. No solutions saved yet.");
    };

    writeln!(w)?;
    writeln!(w, "{}", style(format!("Results for '{}':", query)).bold())?;
    writeln!(w, "{}", "-".repeat(50))?;

    if hits.is_empty() {
        return writeln!(w, "No solution found for '{}'", query);
    }

    for hit in hits {
        for line in &hit.context {
            let marker = if line.is_match {
                MATCH_MARKER
            } else {
                CONTEXT_MARKER
            };
            writeln!(w, "{} {}", marker, line.text)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn store_content(w: &mut impl Write, content: Option<&str>) -> io::Result<()> {
    match content {
        Some(content) => writeln!(w, "{}", content),
        None => writeln!(w, "Memory is empty."),
    }
}

/// One line per parsed entry: date, tags, problem
pub fn entry_summary(w: &mut impl Write, entries: &[SolutionEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(w, "Memory is empty.");
    }
    for entry in entries {
        let problem = entry.problem.lines().next().unwrap_or_default();
        writeln!(
            w,
            "{}  {}  {}",
            style(entry.date.format("%Y-%m-%d")).dim(),
            problem,
            style(&entry.tags).yellow()
        )?;
    }
    Ok(())
}

pub fn patterns(w: &mut impl Write, content: Option<&str>, path: &Path) -> io::Result<()> {
    match content {
        Some(content) => writeln!(w, "{}", content),
        None => {
            writeln!(w, "Patterns file not found.")?;
            writeln!(w, "Create it at: {}", path.display())
        }
    }
}
