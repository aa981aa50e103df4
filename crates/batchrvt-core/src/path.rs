use batchrvt_types::{Error, Result};
use std::path::PathBuf;

/// Environment variable overriding the data folder
pub const DATA_PATH_ENV: &str = "BATCHRVT_DATA_PATH";

/// Resolve the folder holding session script data based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BATCHRVT_DATA_PATH environment variable (with tilde expansion)
/// 3. System data directory
/// 4. ~/.batchrvt (fallback for systems without standard data directory)
pub fn resolve_data_folder(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("BatchRvt"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".batchrvt"));
    }

    Err(Error::Config(
        "Could not determine data folder: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
