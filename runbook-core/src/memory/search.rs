//! Line-oriented substring search with context windows

use serde::Serialize;

/// One line printed as part of a match block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextLine {
    /// Zero-based line index in the store
    pub index: usize,
    pub text: String,
    pub is_match: bool,
}

/// A matching line together with its surrounding context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Zero-based index of the matching line
    pub line: usize,
    pub context: Vec<ContextLine>,
}

/// Case-insensitive substring search over the lines of `content`.
///
/// Every matching line yields its own hit with up to `context` lines on
/// each side. Windows of nearby matches overlap and are not merged.
pub fn search_lines(content: &str, query: &str, context: usize) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&needle))
        .map(|(i, _)| {
            let start = i.saturating_sub(context);
            let end = (i + context + 1).min(lines.len());
            SearchHit {
                line: i,
                context: (start..end)
                    .map(|j| ContextLine {
                        index: j,
                        text: lines[j].to_string(),
                        is_match: j == i,
                    })
                    .collect(),
            }
        })
        .collect()
}
