//! Helpers for fileexplorer.
//!
//! Home directory lookup and `~` expansion for config values, plus the
//! resolution of the directory the widget starts in.

use crate::core::ExplorerError;

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// The user's home directory, if the platform reports one.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory. Other paths are returned as is.
pub fn expand_home_path(input: &str) -> PathBuf {
    if input == "~" {
        return get_home().unwrap_or_else(|| PathBuf::from(input));
    }

    let rest = input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix(&format!("~{}", MAIN_SEPARATOR)));

    match (rest, get_home()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

/// Returns true if `path` exists and is a directory (symlinks followed).
pub fn is_directory(path: &Path) -> bool {
    path.metadata().map(|md| md.is_dir()).unwrap_or(false)
}

/// Picks the starting directory: an explicit argument, then the configured
/// directory, then the working directory. The result is absolute.
pub fn resolve_start_dir(
    arg: Option<&str>,
    configured: Option<&Path>,
) -> Result<PathBuf, ExplorerError> {
    let chosen = match (arg, configured) {
        (Some(a), _) => expand_home_path(a),
        (None, Some(c)) => c.to_path_buf(),
        (None, None) => return std::env::current_dir().map_err(ExplorerError::CurrentDir),
    };
    std::path::absolute(&chosen).map_err(ExplorerError::CurrentDir)
}

/// Strips the verbatim prefix Windows adds to absolute paths.
pub fn readable_path(path: &Path) -> String {
    #[cfg(windows)]
    {
        let display = path.display().to_string();
        display
            .strip_prefix(r"\\?\")
            .unwrap_or(&display)
            .to_string()
    }
    #[cfg(not(windows))]
    {
        path.display().to_string()
    }
}
