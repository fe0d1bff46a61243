//! Where ticket-table keeps its config and logs
//!
//! `$XDG_CONFIG_HOME/ticket-table/` (else `~/.config/ticket-table/`) on
//! Unix/macOS, `%APPDATA%\ticket-table\` on Windows.

use std::path::PathBuf;

const APP_DIR: &str = "ticket-table";

/// Prefix of the rolling log files written by [`crate::tracing::init`]
pub const LOG_FILE_PREFIX: &str = "ticket-table.log";

/// Base config directory, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// `config.yaml` in the config directory
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `logs/` in the config directory
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory (and its parents), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
