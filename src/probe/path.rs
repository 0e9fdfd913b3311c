//! Executable lookup on PATH.
//!
//! Resolution walks PATH entries directly instead of shelling out to
//! `which`, whose behavior varies across systems.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a program's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in candidate_names(tool) {
            let candidate = dir.join(&name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Resolve a program given either a bare name or a path.
///
/// Names containing a path separator are used as-is and only need to exist;
/// bare names are looked up on `path_entries`.
pub fn resolve_program(program: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return is_executable(as_path).then(|| as_path.to_path_buf());
    }
    resolve_tool_path(program, path_entries)
}

const LAUNCHER_EXTENSIONS: [&str; 3] = ["exe", "cmd", "bat"];

/// Names to try on Windows; `python3.11` still gets `.exe` and `.cmd` tried.
#[cfg_attr(not(windows), allow(dead_code))]
fn launcher_names(tool: &str) -> Vec<String> {
    let has_launcher_ext = Path::new(tool)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            LAUNCHER_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });

    if has_launcher_ext {
        vec![tool.to_string()]
    } else {
        vec![format!("{}.exe", tool), format!("{}.cmd", tool), tool.to_string()]
    }
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    launcher_names(tool)
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}
