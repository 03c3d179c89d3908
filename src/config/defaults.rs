//! Default configuration constants.

/// Embedded default `signal-lamp.toml` written on first run.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/signal-lamp.toml");
/// Directory name under the user config root.
pub(super) const APP_DIR_NAME: &str = "signal-lamp";
pub(super) const CONFIG_FILE_NAME: &str = "signal-lamp.toml";
pub(super) const MARKER_FILE_NAME: &str = "current";
pub(super) const TRIGGERS_DIR_NAME: &str = "triggers";
pub(super) const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 10;
pub(super) const DEFAULT_TERMINAL_PROFILES_PATH: &str = "/org/gnome/terminal/legacy/profiles:/";
pub(super) const DEFAULT_TERMINAL_WINDOW_CLASS: &str = "gnome-terminal-server.Gnome-terminal";
/// Opens the context menu, then its "Change Profile" submenu.
pub(super) const DEFAULT_TERMINAL_MENU_KEYS: &[&str] = &["Shift+F10", "r"];
pub(super) const DEFAULT_EDITOR_THEME_KEY: &str = "workbench.colorTheme";
