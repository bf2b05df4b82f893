//! Executable lookup on the search path.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT shell
/// out to `command -v` or `which`; those are builtins on some systems and
/// binaries on others, with inconsistent exit codes.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in candidate_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    let mut names = vec![tool.to_string()];
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT".to_string());
    names.extend(exts.split(';').filter(|e| !e.is_empty()).map(|e| format!("{}{}", tool, e)));
    names
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| split_path(&path))
        .unwrap_or_default()
}

fn split_path(path: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(path)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_executable(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn resolves_first_matching_entry() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_executable(second.path(), "jq");
        let expected = write_executable(first.path(), "jq");

        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(resolve_tool_path("jq", &entries), Some(expected));
    }

    #[test]
    fn skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("peco");
        fs::write(&path, "not a binary").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(resolve_tool_path("peco", &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("make")).unwrap();

        assert_eq!(resolve_tool_path("make", &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn missing_tool_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_tool_path("jq", &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn split_path_drops_empty_entries() {
        let entries = split_path(OsStr::new("/usr/bin::/bin"));
        assert_eq!(entries, vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
    }

    #[test]
    fn is_executable_reads_mode_bits() {
        let dir = TempDir::new().unwrap();
        let exe = write_executable(dir.path(), "tool");
        assert!(is_executable(&exe));
        assert!(!is_executable(&dir.path().join("missing")));
    }
}
