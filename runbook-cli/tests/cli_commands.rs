use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(bin: &str, workspace: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .arg("--workspace")
        .arg(workspace)
        .arg("--config-dir")
        .arg(workspace.join(".runbook"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run command")
}

fn memory(workspace: &Path, args: &[&str]) -> (bool, String) {
    let output = run(env!("CARGO_BIN_EXE_memory-manager"), workspace, args);
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

fn directives(workspace: &Path, args: &[&str]) -> (bool, String) {
    let output = run(env!("CARGO_BIN_EXE_directive-runner"), workspace, args);
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

fn is_iso_date(s: &str) -> bool {
    s.len() == 10
        && s.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        })
}

#[test]
fn test_add_then_list_shows_entry() {
    let workspace = TempDir::new().unwrap();

    let (ok, stdout) = memory(
        workspace.path(),
        &["add", "Slow API", "Added Redis cache", "#api #performance"],
    );
    assert!(ok);
    assert!(stdout.contains("Solution added: #api #performance"));

    let (ok, stdout) = memory(workspace.path(), &["list"]);
    assert!(ok);
    assert!(stdout.contains("Slow API"));
    assert!(stdout.contains("Added Redis cache"));
    assert!(stdout.contains("#api #performance"));

    let dated = stdout
        .lines()
        .find_map(|line| line.strip_prefix("### Solution - "))
        .expect("entry heading");
    assert!(is_iso_date(dated.trim()), "not a date: {}", dated);
}

#[test]
fn test_entries_listed_newest_first() {
    let workspace = TempDir::new().unwrap();
    for n in ["one", "two", "three"] {
        let problem = format!("problem {}", n);
        let (ok, _) = memory(workspace.path(), &["add", problem.as_str(), "fix", "#t"]);
        assert!(ok);
    }

    let (_, stdout) = memory(workspace.path(), &["list"]);
    let three = stdout.find("problem three").unwrap();
    let two = stdout.find("problem two").unwrap();
    let one = stdout.find("problem one").unwrap();
    assert!(three < two && two < one);

    let (_, summary) = memory(workspace.path(), &["list", "--summary"]);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("problem three"));
    assert!(lines[2].contains("problem one"));
}

#[test]
fn test_search_is_case_insensitive() {
    let workspace = TempDir::new().unwrap();
    memory(workspace.path(), &["add", "Slow API", "Added Redis cache", "#api"]);

    let (ok, stdout) = memory(workspace.path(), &["search", "redis"]);
    assert!(ok);
    assert!(stdout.contains(">>> **Solution:** Added Redis cache"));
}

#[test]
fn test_search_without_match() {
    let workspace = TempDir::new().unwrap();
    memory(workspace.path(), &["add", "Slow API", "Added Redis cache", "#api"]);

    let (ok, stdout) = memory(workspace.path(), &["search", "kafka"]);
    assert!(ok);
    assert!(stdout.contains("No solution found for 'kafka'"));
    assert!(!stdout.contains(">>>"));
}

#[test]
fn test_missing_files_are_reported() {
    let workspace = TempDir::new().unwrap();

    let (ok, stdout) = memory(workspace.path(), &["list"]);
    assert!(ok);
    assert_eq!(stdout, "Memory is empty.\n");

    let (ok, stdout) = memory(workspace.path(), &["search", "x"]);
    assert!(ok);
    assert_eq!(stdout, "Memory is empty. No solutions saved yet.\n");

    let (ok, stdout) = memory(workspace.path(), &["patterns"]);
    assert!(ok);
    assert!(stdout.contains("Patterns file not found."));
    assert!(stdout.contains("patterns.md"));
}

#[test]
fn test_patterns_printed_verbatim() {
    let workspace = TempDir::new().unwrap();
    let memory_dir = workspace.path().join("memory");
    std::fs::create_dir_all(&memory_dir).unwrap();
    std::fs::write(memory_dir.join("patterns.md"), "# Patterns\n- cache hot reads").unwrap();

    let (ok, stdout) = memory(workspace.path(), &["patterns"]);
    assert!(ok);
    assert_eq!(stdout, "# Patterns\n- cache hot reads\n");
}

#[test]
fn test_add_with_missing_arguments_changes_nothing() {
    let workspace = TempDir::new().unwrap();

    let (ok, stdout) = memory(workspace.path(), &["add", "only problem", "and solution"]);
    assert!(ok);
    assert!(stdout.starts_with("Usage: memory-manager add"));
    assert!(stdout.contains("Example:"));
    assert!(!workspace.path().join("memory").join("solutions.md").exists());
}

#[test]
fn test_extra_arguments_are_ignored() {
    let workspace = TempDir::new().unwrap();

    let (ok, stdout) = memory(workspace.path(), &["add", "p", "s", "#t", "extra"]);
    assert!(ok);
    assert!(stdout.contains("Solution added: #t"));

    let (ok, stdout) = memory(workspace.path(), &["search", "foo", "bar"]);
    assert!(ok);
    assert!(stdout.contains("No solution found for 'foo'"));

    let (ok, stdout) = memory(workspace.path(), &["list", "x"]);
    assert!(ok);
    assert!(stdout.contains("**Problem:** p"));
    assert!(!stdout.contains("extra"));

    let (ok, stdout) = memory(workspace.path(), &["patterns", "x"]);
    assert!(ok);
    assert!(stdout.contains("Patterns file not found."));

    let (ok, stdout) = directives(workspace.path(), &["list", "x"]);
    assert!(ok);
    assert!(stdout.contains("Directives directory not found"));
}

#[test]
fn test_usage_and_unknown_command() {
    let workspace = TempDir::new().unwrap();

    let (ok, stdout) = memory(workspace.path(), &[]);
    assert!(ok);
    assert!(stdout.starts_with("Usage: memory-manager"));

    let (ok, stdout) = memory(workspace.path(), &["forget"]);
    assert!(ok);
    assert_eq!(stdout, "Unknown command: forget\n");

    let (ok, stdout) = memory(workspace.path(), &["search"]);
    assert!(ok);
    assert_eq!(stdout, "Usage: memory-manager search <term>\n");
}

#[test]
fn test_directive_list_filters_markdown() {
    let workspace = TempDir::new().unwrap();
    let dir = workspace.path().join("directives");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("b.md"), "B").unwrap();
    std::fs::write(dir.join("a.md"), "A").unwrap();
    std::fs::write(dir.join("c.txt"), "C").unwrap();

    let (ok, stdout) = directives(workspace.path(), &["list"]);
    assert!(ok);
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("  - "))
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_directive_show_and_missing() {
    let workspace = TempDir::new().unwrap();
    let dir = workspace.path().join("directives");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("deploy.md"), "1. build\n2. ship\n").unwrap();

    let (ok, stdout) = directives(workspace.path(), &["deploy"]);
    assert!(ok);
    assert!(stdout.contains("=== DIRECTIVE: deploy ==="));
    assert!(stdout.contains("1. build\n2. ship\n"));

    let (ok, stdout) = directives(workspace.path(), &["rollback"]);
    assert!(ok);
    assert!(stdout.contains("Directive 'rollback' not found."));
}

#[test]
fn test_directive_runner_without_directory_or_args() {
    let workspace = TempDir::new().unwrap();

    let (ok, stdout) = directives(workspace.path(), &["list"]);
    assert!(ok);
    assert!(stdout.contains("Directives directory not found"));

    let (ok, stdout) = directives(workspace.path(), &[]);
    assert!(ok);
    assert!(stdout.starts_with("Usage: directive-runner"));
}
