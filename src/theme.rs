//! Ordered theme set and the current-theme selection.
//!
//! A [`ThemeConfig`] is built once per run from the config document plus the
//! persisted marker, mutated by [`ThemeConfig::set_theme`] or
//! [`ThemeConfig::cycle`], and then written back by the caller.

use std::collections::{BTreeMap, HashMap};

use crate::backends::BackendKey;
use crate::error::ConfigError;

/// Backend key (as written in the config) -> value, for one theme.
pub type ThemeValues = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    order: Vec<String>,
    themes: HashMap<String, ThemeValues>,
    current: String,
}

impl ThemeConfig {
    /// Build from themes in declaration order and the persisted current name.
    ///
    /// `current` is kept verbatim even when it names no configured theme;
    /// [`ThemeConfig::cycle`] recovers from that.
    pub fn new(
        themes: Vec<(String, ThemeValues)>,
        current: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mut order = Vec::with_capacity(themes.len());
        let mut by_name = HashMap::with_capacity(themes.len());
        for (name, values) in themes {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("theme names must not be empty".into()));
            }
            if by_name.contains_key(&name) {
                return Err(ConfigError::Invalid(format!("theme `{name}` is declared twice")));
            }
            order.push(name.clone());
            by_name.insert(name, values);
        }

        Ok(Self {
            order,
            themes: by_name,
            current: current.into().trim().to_string(),
        })
    }

    /// Theme names in declaration order.
    pub fn theme_names(&self) -> &[String] {
        &self.order
    }

    /// Current theme, `None` when unset.
    pub fn current(&self) -> Option<&str> {
        (!self.current.is_empty()).then_some(self.current.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Raw backend values of a theme.
    pub fn values(&self, name: &str) -> Option<&ThemeValues> {
        self.themes.get(name)
    }

    /// Select `name` exactly; unknown names leave the selection unchanged.
    pub fn set_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.contains(name) {
            return Err(ConfigError::UnknownTheme(name.to_string()));
        }
        self.current = name.to_string();
        Ok(())
    }

    /// Advance to the next theme, wrapping around.
    ///
    /// An unset or unrecognized current theme resets to the first one.
    pub fn cycle(&mut self) -> Result<&str, ConfigError> {
        let Some(first) = self.order.first() else {
            return Err(ConfigError::EmptyConfiguration);
        };

        let next = match self.order.iter().position(|name| *name == self.current) {
            Some(idx) => self.order[(idx + 1) % self.order.len()].clone(),
            None => {
                if !self.current.is_empty() {
                    tracing::warn!(
                        current = %self.current,
                        available = ?self.order,
                        "current theme is not configured, starting over at the first theme"
                    );
                }
                first.clone()
            }
        };
        self.current = next;
        Ok(&self.current)
    }

    /// Values of `name` keyed by known backends; unknown keys are skipped.
    pub fn backend_values(&self, name: &str) -> BTreeMap<BackendKey, String> {
        let Some(values) = self.themes.get(name) else {
            return BTreeMap::new();
        };
        values
            .iter()
            .filter_map(|(key, value)| match BackendKey::from_config_key(key) {
                Some(backend) => Some((backend, value.clone())),
                None => {
                    tracing::debug!(theme = name, key = %key, "ignoring unknown backend key");
                    None
                }
            })
            .collect()
    }
}
