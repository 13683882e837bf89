//! Path utilities: expand `~`, resolve export destinations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Explicit `--file` wins; otherwise `default_name` inside `dir`.
pub fn resolve_output(file: Option<&str>, dir: &Path, default_name: &str) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => dir.join(default_name),
    }
}
