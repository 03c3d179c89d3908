//! Configuration data model.
//!
//! Struct definitions plus default values. Loading and theme-table
//! validation live in `config::loader`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::defaults::{
    CONFIG_FILE_NAME, DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_EDITOR_THEME_KEY,
    DEFAULT_TERMINAL_MENU_KEYS, DEFAULT_TERMINAL_PROFILES_PATH, DEFAULT_TERMINAL_WINDOW_CLASS,
    MARKER_FILE_NAME, TRIGGERS_DIR_NAME,
};
use crate::theme::ThemeConfig;

/// Top-level runtime configuration (everything except the themes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub settings: GeneralSettings,
    pub terminal: TerminalSettings,
    pub editor: EditorSettings,
    pub paths: ConfigPaths,
}

impl AppConfig {
    /// Default settings for a config directory.
    pub fn for_dir(dir: &Path) -> Self {
        Self {
            settings: GeneralSettings::default(),
            terminal: TerminalSettings::default(),
            editor: EditorSettings::default(),
            paths: ConfigPaths::for_dir(dir),
        }
    }

    /// Per-command time limit; `None` when disabled with `0`.
    pub fn command_timeout(&self) -> Option<Duration> {
        match self.settings.command_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Files and directories that make up one signal-lamp installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Directory holding everything below.
    pub dir: PathBuf,
    /// `signal-lamp.toml`.
    pub config_file: PathBuf,
    /// Last applied theme name.
    pub marker_file: PathBuf,
    /// Scripts run with the new theme name.
    pub triggers_dir: PathBuf,
}

impl ConfigPaths {
    pub fn for_dir(dir: &Path) -> Self {
        Self::with_config_file(dir, dir.join(CONFIG_FILE_NAME))
    }

    /// Paths for an explicit config file; siblings live next to it.
    pub fn for_config_file(config_file: &Path) -> Self {
        let dir = config_file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::with_config_file(dir, config_file.to_path_buf())
    }

    fn with_config_file(dir: &Path, config_file: PathBuf) -> Self {
        Self {
            dir: dir.to_path_buf(),
            config_file,
            marker_file: dir.join(MARKER_FILE_NAME),
            triggers_dir: dir.join(TRIGGERS_DIR_NAME),
        }
    }
}

/// `[settings]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Limit for each external command; `0` waits forever.
    pub command_timeout_secs: u64,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
        }
    }
}

/// `[terminal]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TerminalSettings {
    /// dconf directory holding the profile list.
    pub profiles_path: String,
    /// Substring of a `wmctrl -lx` line identifying terminal windows.
    pub window_class: String,
    /// Keys that open the profile menu; the menu position is appended.
    pub menu_keys: Vec<String>,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            profiles_path: DEFAULT_TERMINAL_PROFILES_PATH.to_string(),
            window_class: DEFAULT_TERMINAL_WINDOW_CLASS.to_string(),
            menu_keys: DEFAULT_TERMINAL_MENU_KEYS
                .iter()
                .map(|key| key.to_string())
                .collect(),
        }
    }
}

/// `[editor]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorSettings {
    /// Explicit `settings.json`; defaults to the VS Code user settings.
    pub settings_path: Option<PathBuf>,
    /// Settings key receiving the color theme.
    pub key: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            settings_path: None,
            key: DEFAULT_EDITOR_THEME_KEY.to_string(),
        }
    }
}

/// Raw on-disk shape of `signal-lamp.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub settings: GeneralSettings,
    pub terminal: TerminalSettings,
    pub editor: EditorSettings,
    /// `[themes.<name>]` tables in document order.
    pub themes: toml::Table,
}

/// Result of loading config plus the persisted current theme.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub app: AppConfig,
    pub themes: ThemeConfig,
}

/// Result of bootstrapping the config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    /// The default config file was written.
    Created { path: PathBuf },
    /// A config file was already present and left untouched.
    AlreadyInitialized { path: PathBuf },
}
