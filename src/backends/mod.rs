//! Theme backends: the applications a theme switch reaches.
//!
//! Each backend owns one external resource (terminal profiles, editor
//! settings, user trigger scripts), so backends can run side by side without
//! coordinating.

pub mod editor;
pub mod terminal;
pub mod triggers;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::BackendError;
use crate::process::ProcessRunner;

use self::editor::VsCodeBackend;
use self::terminal::GnomeTerminalBackend;
use self::triggers::TriggerScriptsBackend;

/// Stable identifier of a backend, as written in theme tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BackendKey {
    Terminal,
    Editor,
    Triggers,
}

impl BackendKey {
    pub const ALL: [BackendKey; 3] = [Self::Terminal, Self::Editor, Self::Triggers];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Editor => "editor",
            Self::Triggers => "triggers",
        }
    }

    /// Parse a theme-table key; unknown keys yield `None`.
    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key)
    }
}

impl fmt::Display for BackendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can switch one application to a theme value.
#[async_trait]
pub trait ThemeBackend: Send + Sync {
    /// Apply `value` (a profile name, color theme, or theme name).
    async fn apply(&self, value: &str) -> Result<(), BackendError>;
}

/// Backends available to a dispatch, in registration order.
#[derive(Default, Clone)]
pub struct BackendRegistry {
    entries: Vec<(BackendKey, Arc<dyn ThemeBackend>)>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `backend` under `key`, replacing any previous one in place.
    pub fn register(&mut self, key: BackendKey, backend: Arc<dyn ThemeBackend>) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = backend;
        } else {
            self.entries.push((key, backend));
        }
    }

    pub fn get(&self, key: BackendKey) -> Option<&Arc<dyn ThemeBackend>> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, backend)| backend)
    }

    pub fn keys(&self) -> impl Iterator<Item = BackendKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BackendKey, &Arc<dyn ThemeBackend>)> + '_ {
        self.entries.iter().map(|(key, backend)| (*key, backend))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

/// Build the registry used by the CLI: terminal, editor, trigger scripts.
pub fn default_registry(config: &AppConfig, runner: Arc<dyn ProcessRunner>) -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register(
        BackendKey::Terminal,
        Arc::new(GnomeTerminalBackend::new(
            runner.clone(),
            config.terminal.clone(),
        )),
    );
    registry.register(
        BackendKey::Editor,
        Arc::new(VsCodeBackend::new(config.editor.clone())),
    );
    registry.register(
        BackendKey::Triggers,
        Arc::new(TriggerScriptsBackend::new(
            runner,
            config.paths.triggers_dir.clone(),
        )),
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    #[async_trait]
    impl ThemeBackend for Noop {
        async fn apply(&self, _value: &str) -> Result<(), BackendError> {
            Ok(())
        }
    }

    #[test]
    fn backend_keys_round_trip_through_config_names() {
        for key in BackendKey::ALL {
            assert_eq!(BackendKey::from_config_key(key.as_str()), Some(key));
        }
        assert_eq!(BackendKey::from_config_key("Terminal"), None);
        assert_eq!(BackendKey::from_config_key("kitty"), None);
    }

    #[test]
    fn register_replaces_in_place() {
        let mut registry = BackendRegistry::new();
        registry.register(BackendKey::Editor, Arc::new(Noop));
        registry.register(BackendKey::Terminal, Arc::new(Noop));
        registry.register(BackendKey::Editor, Arc::new(Noop));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            vec![BackendKey::Editor, BackendKey::Terminal]
        );
        assert!(registry.get(BackendKey::Triggers).is_none());
    }

    #[test]
    fn default_registry_covers_every_backend() {
        let config = AppConfig::for_dir(std::path::Path::new("/tmp/signal-lamp-test"));
        let runner: Arc<dyn ProcessRunner> = Arc::new(crate::testsupport::ScriptedRunner::new());
        let registry = default_registry(&config, runner);
        assert_eq!(registry.keys().collect::<Vec<_>>(), BackendKey::ALL.to_vec());
    }
}
