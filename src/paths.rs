//! XDG-style path utilities for configuration and cache directories.
//!
//! Paths follow XDG Base Directory conventions on every platform rather than
//! OS-specific locations.

use std::path::PathBuf;

const APP_DIR: &str = "polyglot";

/// Returns the configuration directory for polyglot.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/polyglot` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/polyglot` otherwise
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join(APP_DIR),
        |xdg| PathBuf::from(xdg).join(APP_DIR),
    )
}

/// Returns the cache directory for polyglot (used for the playback file).
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/polyglot` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/polyglot` otherwise
pub fn cache_dir() -> PathBuf {
    std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| home_dir().join(".cache").join(APP_DIR),
        |xdg| PathBuf::from(xdg).join(APP_DIR),
    )
}

/// Returns the user's home directory, or the current directory if unknown.
fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
