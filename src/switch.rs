//! One theme switch: pick the target, fan it out, remember it.

use std::path::Path;

use crate::backends::{BackendKey, BackendRegistry};
use crate::config::write_marker;
use crate::dispatch::{dispatch, DispatchResult};
use crate::error::ConfigError;
use crate::theme::ThemeConfig;

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the current theme.
    Query,
    /// Print every configured theme.
    List,
    /// Advance to the next theme and apply it.
    Toggle,
    /// Apply a theme by name.
    Set(String),
}

impl ThemeAction {
    pub fn applies_theme(&self) -> bool {
        matches!(self, Self::Toggle | Self::Set(_))
    }
}

/// Move the selection for `action` and return the theme to apply.
///
/// Read-only actions return `Ok(None)` and leave `themes` untouched.
pub fn resolve_target(
    themes: &mut ThemeConfig,
    action: &ThemeAction,
) -> Result<Option<String>, ConfigError> {
    match action {
        ThemeAction::Query | ThemeAction::List => Ok(None),
        ThemeAction::Toggle => themes.cycle().map(|name| Some(name.to_string())),
        ThemeAction::Set(name) => {
            themes.set_theme(name)?;
            Ok(Some(name.clone()))
        }
    }
}

/// Outcome of applying one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchReport {
    pub theme: String,
    pub results: Vec<DispatchResult>,
}

impl SwitchReport {
    pub fn failures(&self) -> impl Iterator<Item = &DispatchResult> + '_ {
        self.results.iter().filter(|result| !result.is_ok())
    }

    pub fn all_ok(&self) -> bool {
        self.results.iter().all(DispatchResult::is_ok)
    }
}

/// Apply `theme` through every registered backend, then persist it.
///
/// Backend failures are reported, not returned: the marker is written
/// regardless so the next toggle moves on from this theme. Only an unknown
/// theme or a failed marker write is an error.
pub async fn switch_theme(
    themes: &ThemeConfig,
    theme: &str,
    backends: &BackendRegistry,
    marker_path: &Path,
) -> Result<SwitchReport, ConfigError> {
    if !themes.contains(theme) {
        return Err(ConfigError::UnknownTheme(theme.to_string()));
    }

    let mut values = themes.backend_values(theme);
    // Trigger scripts receive the theme name, not a per-theme value.
    values.insert(BackendKey::Triggers, theme.to_string());

    tracing::info!(theme, backends = ?backends, "switching theme");
    let results = dispatch(&values, backends).await;
    write_marker(marker_path, theme)?;

    Ok(SwitchReport {
        theme: theme.to_string(),
        results,
    })
}
