//! Config-path helpers and first-run bootstrap.
//!
//! Writes use create-new semantics so concurrent first runs never clobber a
//! file another process just created.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{APP_DIR_NAME, DEFAULT_CONFIG_TEMPLATE};
use super::{ConfigInitResult, ConfigPaths};

/// Default per-user directory (`~/.config/signal-lamp`).
pub fn default_config_dir() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Create the config directory, `triggers/`, and a default config file.
///
/// Existing files are left untouched.
pub fn ensure_config_layout(paths: &ConfigPaths) -> Result<ConfigInitResult, ConfigError> {
    std::fs::create_dir_all(&paths.dir)?;
    std::fs::create_dir_all(&paths.triggers_dir)?;
    ensure_file_with_default_content(&paths.config_file, DEFAULT_CONFIG_TEMPLATE)
}

fn ensure_file_with_default_content(
    path: &Path,
    content: &str,
) -> Result<ConfigInitResult, ConfigError> {
    if path.exists() {
        return Ok(ConfigInitResult::AlreadyInitialized {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // create_new avoids clobbering if another process won the race.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())?;
            tracing::info!(path = %path.display(), "wrote default config");
            Ok(ConfigInitResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Ok(ConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
