//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::theme::{ThemeConfig, ThemeValues};

use super::init::default_config_dir;
use super::persist::read_marker_with;
use super::{AppConfig, ConfigPaths, FileConfig, LoadedConfig};

/// Resolve where config, marker, and triggers live.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn resolve_paths(path_override: Option<&str>) -> Result<ConfigPaths, ConfigError> {
    resolve_paths_with(path_override, default_config_dir)
}

pub(super) fn resolve_paths_with<FRoot>(
    path_override: Option<&str>,
    config_dir: FRoot,
) -> Result<ConfigPaths, ConfigError>
where
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override {
        return Ok(ConfigPaths::for_config_file(Path::new(path)));
    }
    config_dir()
        .map(|dir| ConfigPaths::for_dir(&dir))
        .ok_or_else(|| {
            ConfigError::Invalid(
                "unable to resolve config directory (~/.config/signal-lamp)".to_string(),
            )
        })
}

/// Load settings, themes, and the persisted current theme.
pub fn load_config(paths: &ConfigPaths) -> Result<LoadedConfig, ConfigError> {
    load_config_with(paths, |path| std::fs::read_to_string(path))
}

pub(super) fn load_config_with<FRead>(
    paths: &ConfigPaths,
    read_file: FRead,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    let text = read_file(&paths.config_file)?;
    let parsed: FileConfig = toml::from_str(&text)?;
    let current = read_marker_with(&paths.marker_file, &read_file)?;
    let themes = ThemeConfig::new(theme_tables(parsed.themes)?, current)?;
    tracing::debug!(
        config = %paths.config_file.display(),
        themes = ?themes.theme_names(),
        current = ?themes.current(),
        "loaded config"
    );

    Ok(LoadedConfig {
        app: AppConfig {
            settings: parsed.settings,
            terminal: parsed.terminal,
            editor: parsed.editor,
            paths: paths.clone(),
        },
        themes,
    })
}

/// Validate `[themes.<name>]` tables, keeping document order.
fn theme_tables(table: toml::Table) -> Result<Vec<(String, ThemeValues)>, ConfigError> {
    table
        .into_iter()
        .map(|(name, value)| {
            let toml::Value::Table(entries) = value else {
                return Err(ConfigError::Invalid(format!(
                    "theme `{name}` must be a table of backend values"
                )));
            };
            let mut values = ThemeValues::new();
            for (backend, value) in entries {
                let toml::Value::String(text) = value else {
                    return Err(ConfigError::Invalid(format!(
                        "theme `{name}`: `{backend}` must be a string"
                    )));
                };
                values.insert(backend, text);
            }
            Ok((name, values))
        })
        .collect()
}
