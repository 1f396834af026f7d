// Executable discovery for adb and fastboot.
// Pure lookups: no subprocess is spawned and nothing is cached.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// The two command-line tools this crate wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Adb,
    Fastboot,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Adb => "adb",
            Tool::Fastboot => "fastboot",
        }
    }

    /// Canonical executable filename on the current platform
    /// ("adb.exe" on Windows, "adb" elsewhere).
    pub fn exe_name(self) -> String {
        format!("{}{}", self.name(), env::consts::EXE_SUFFIX)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the executable for `tool`.
///
/// With a custom path: accept it when its name ends (case-insensitively)
/// with the canonical executable filename and the file exists, or when it
/// is a directory containing the executable. A custom path that matches
/// neither resolves to `None` with no PATH fallback, so a misconfigured
/// path fails closed instead of silently picking up a different install.
///
/// Without a custom path: first hit on the PATH environment variable wins.
pub fn locate(tool: Tool, custom_path: Option<&Path>) -> Option<PathBuf> {
    let exe = tool.exe_name();
    match custom_path {
        Some(path) => {
            let name_matches = path
                .to_str()
                .map(|s| s.to_lowercase().ends_with(&exe.to_lowercase()))
                .unwrap_or(false);
            if name_matches && path.is_file() {
                return Some(path.to_path_buf());
            }
            let joined = path.join(&exe);
            if joined.is_file() { Some(joined) } else { None }
        }
        None => search_path(&exe),
    }
}

/// Boolean-mode variant of [`locate`] for up-front validation.
pub fn is_available(tool: Tool, custom_path: Option<&Path>) -> bool {
    locate(tool, custom_path).is_some()
}

fn search_path(exe: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(exe))
        .find(|candidate| candidate.is_file())
}
