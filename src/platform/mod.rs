// SmartWeb platform abstraction
// Resolves where settings and the web app database live on Windows, macOS, and Linux.
//
// Each platform module exposes `config_dir` and `data_dir`, built from environment
// lookups passed in by the caller so the resolution logic is testable without
// touching the process environment.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
use macos as os;

#[cfg(target_os = "windows")]
use windows as os;

/// File name of the web app database inside the data directory.
pub const DATABASE_FILE: &str = "smartweb.db";

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Returns the platform-specific configuration directory for SmartWeb.
///
/// - **Linux**: `$XDG_CONFIG_HOME/smartweb` or `~/.config/smartweb`
/// - **macOS**: `~/Library/Application Support/SmartWeb`
/// - **Windows**: `%APPDATA%/SmartWeb`
pub fn get_config_dir() -> PathBuf {
    os::config_dir(env_lookup)
}

/// Returns the platform-specific data directory for SmartWeb.
///
/// - **Linux**: `$XDG_DATA_HOME/smartweb` or `~/.local/share/smartweb`
/// - **macOS**: `~/Library/Application Support/SmartWeb`
/// - **Windows**: `%APPDATA%/SmartWeb`
pub fn get_data_dir() -> PathBuf {
    os::data_dir(env_lookup)
}

/// Default location of the web app database.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}
