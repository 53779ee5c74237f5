//! Default locations for bookxchange files.
//!
//! Everything lives under `~/.bookxchange/`:
//! - `~/.bookxchange/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the bookxchange home directory (`~/.bookxchange/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bookxchange")
}

/// Returns the default config file path (`~/.bookxchange/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
