//! Configuration loading, bootstrap, and current-theme persistence.
//!
//! Everything lives in one directory, `$XDG_CONFIG_HOME/signal-lamp`
//! (or `~/.config/signal-lamp`), unless `--config` names a file elsewhere:
//! - `signal-lamp.toml`: settings plus `[themes.<name>]` tables;
//! - `current`: the last theme applied;
//! - `triggers/`: scripts run with the new theme name.

mod defaults;
mod init;
mod loader;
mod persist;
mod types;

pub use init::{config_root_dir, default_config_dir, ensure_config_layout};
pub use loader::{load_config, resolve_paths};
pub use persist::{read_marker, write_marker};
pub use types::{
    AppConfig, ConfigInitResult, ConfigPaths, EditorSettings, GeneralSettings, LoadedConfig,
    TerminalSettings,
};
use types::FileConfig;
