//! Path utilities: expand `~`, validate absolute output paths.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Export and backup targets must be absolute paths.
pub fn require_absolute(path: &str) -> AppResult<&Path> {
    let p = Path::new(path);
    if !p.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {path}"
        )));
    }
    Ok(p)
}
