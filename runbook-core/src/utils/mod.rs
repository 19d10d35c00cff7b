//! Utility functions and helpers

use std::path::{Path, PathBuf};

/// Suffix of the staging file used by [`write_atomic`]
pub const TMP_SUFFIX: &str = ".tmp";

/// Expand a leading `~` or `~/` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

/// Check that a name is a plain file name: no separators, no parent references
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

/// Sibling path `write_atomic` stages content in: the file name plus `.tmp`
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}

/// Write `content` to `path` through a sibling temporary file and a rename
pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = staging_path(path);
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)
}

/// Read a file to a string, mapping "does not exist" to `None`
pub fn read_optional<P: AsRef<Path>>(path: P) -> std::io::Result<Option<String>> {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_plain_name() {
        assert!(is_plain_name("deploy"));
        assert!(is_plain_name("deploy-v2.notes"));
        assert!(!is_plain_name(""));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name("../secrets"));
        assert!(!is_plain_name("a\\b"));
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/srv/work");
        assert_eq!(resolve_path(base, "memory"), PathBuf::from("/srv/work/memory"));
        assert_eq!(resolve_path(base, "/etc/runbook"), PathBuf::from("/etc/runbook"));
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/notes"), home.join("notes"));
            assert_eq!(expand_home("~"), home);
        }
        assert_eq!(expand_home("plain"), PathBuf::from("plain"));
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("file.md");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_write_atomic_leaves_same_stem_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let neighbour = temp_dir.path().join("solutions.tmp");
        std::fs::write(&neighbour, "patterns").unwrap();

        write_atomic(temp_dir.path().join("solutions.md"), "log").unwrap();

        assert_eq!(std::fs::read_to_string(&neighbour).unwrap(), "patterns");
        assert_eq!(
            staging_path(Path::new("memory/solutions.md")),
            PathBuf::from("memory/solutions.md.tmp")
        );
    }

    #[test]
    fn test_read_optional_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.md");
        assert!(read_optional(&missing).unwrap().is_none());

        std::fs::write(&missing, "here").unwrap();
        assert_eq!(read_optional(&missing).unwrap().as_deref(), Some("here"));
    }
}
