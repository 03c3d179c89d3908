//! Current-theme marker persistence.
//!
//! The marker is a single line holding the last theme the user asked for.
//! It is written even when a backend failed to switch.

use std::path::Path;

use crate::error::ConfigError;

/// Read the persisted theme name; a missing marker means "unset".
pub fn read_marker(path: &Path) -> Result<String, ConfigError> {
    read_marker_with(path, &|path: &Path| std::fs::read_to_string(path))
}

pub(super) fn read_marker_with<FRead>(path: &Path, read_file: &FRead) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(path) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Persist `theme` as the current theme.
pub fn write_marker(path: &Path, theme: &str) -> Result<(), ConfigError> {
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(ConfigError::Invalid(
            "current theme cannot be empty".to_string(),
        ));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{theme}\n"))?;
    tracing::debug!(path = %path.display(), theme, "saved current theme");
    Ok(())
}
