//! GNOME Terminal backend.
//!
//! Switching profiles takes two halves:
//! - `gsettings` changes the default profile, which only affects new windows;
//! - already open windows are driven through their "Change Profile" menu with
//!   `xdotool`, one focused window at a time.
//!
//! The menu route relies on "Enable the menu accelerator key" being active in
//! Preferences > Global > General.

pub mod dump;
pub mod hotkey;
pub mod windows;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::backends::ThemeBackend;
use crate::config::TerminalSettings;
use crate::error::{BackendError, BackendStage, ProcessError};
use crate::process::ProcessRunner;

use self::dump::parse_profile_dump;
use self::hotkey::profile_position;
use self::windows::matching_window_ids;

const DCONF: &str = "dconf";
const GSETTINGS: &str = "gsettings";
const WMCTRL: &str = "wmctrl";
const XDOTOOL: &str = "xdotool";
const PROFILES_LIST_SCHEMA: &str = "org.gnome.Terminal.ProfilesList";

/// Applies a profile, by display name, to GNOME Terminal.
pub struct GnomeTerminalBackend {
    runner: Arc<dyn ProcessRunner>,
    settings: TerminalSettings,
}

impl GnomeTerminalBackend {
    pub fn new(runner: Arc<dyn ProcessRunner>, settings: TerminalSettings) -> Self {
        Self { runner, settings }
    }

    async fn xdotool(&self, args: &[&str]) -> Result<String, ProcessError> {
        self.runner.run(XDOTOOL, args).await
    }

    /// Focus each window and select the profile entry at `position`.
    ///
    /// Keeps going after a failed window; returns `(window, error)` pairs.
    async fn retheme_windows(&self, window_ids: &[String], position: usize) -> Vec<(String, String)> {
        let position = position.to_string();
        let mut key_args = vec!["key", "--clearmodifiers"];
        key_args.extend(self.settings.menu_keys.iter().map(String::as_str));
        key_args.push(position.as_str());

        let mut failures = Vec::new();
        for window_id in window_ids {
            // Keystrokes go to whatever has focus; --sync waits until it lands.
            if let Err(err) = self.xdotool(&["windowfocus", "--sync", window_id.as_str()]).await {
                warn!(window = %window_id, error = %err, "could not focus terminal window");
                failures.push((window_id.clone(), err.to_string()));
                continue;
            }
            if let Err(err) = self.xdotool(&key_args).await {
                warn!(window = %window_id, error = %err, "could not send profile hotkey");
                failures.push((window_id.clone(), err.to_string()));
                continue;
            }
            debug!(window = %window_id, position = %position, "switched terminal window profile");
        }
        failures
    }
}

#[async_trait]
impl ThemeBackend for GnomeTerminalBackend {
    async fn apply(&self, profile_name: &str) -> Result<(), BackendError> {
        let dump_text = self
            .runner
            .run(DCONF, &["dump", self.settings.profiles_path.as_str()])
            .await
            .map_err(BackendError::at(BackendStage::Dump))?;
        let dump = parse_profile_dump(&dump_text).map_err(BackendError::at(BackendStage::Parse))?;

        let Some(target) = dump.identifier_for(profile_name) else {
            info!(profile = profile_name, "no terminal profile with that name, not switching");
            return Ok(());
        };
        if target == dump.current_identifier {
            info!(profile = profile_name, "terminal profile already active, not switching");
            return Ok(());
        }

        self.runner
            .run(GSETTINGS, &["set", PROFILES_LIST_SCHEMA, "default", target])
            .await
            .map_err(BackendError::at(BackendStage::SetDefault))?;
        info!(profile = profile_name, id = target, "set default terminal profile");

        let listing = self
            .runner
            .run(WMCTRL, &["-lx"])
            .await
            .map_err(BackendError::at(BackendStage::ListWindows))?;
        let window_ids = matching_window_ids(&listing, &self.settings.window_class);
        if window_ids.is_empty() {
            debug!("no open terminal windows");
            return Ok(());
        }

        let focused = self
            .xdotool(&["getwindowfocus"])
            .await
            .map_err(BackendError::at(BackendStage::Focus))?
            .trim()
            .to_string();
        let position =
            profile_position(&dump.order, target).map_err(BackendError::at(BackendStage::Hotkey))?;

        let failures = self.retheme_windows(&window_ids, position).await;
        let refocus = self.xdotool(&["windowfocus", "--sync", focused.as_str()]).await;

        if !failures.is_empty() {
            let mut message = failures
                .iter()
                .map(|(window, err)| format!("window {window}: {err}"))
                .collect::<Vec<_>>()
                .join("; ");
            if let Err(err) = refocus {
                message.push_str(&format!("; refocus {focused}: {err}"));
            }
            return Err(BackendError {
                stage: BackendStage::Window,
                message: format!(
                    "{} of {} terminal windows failed: {message}",
                    failures.len(),
                    window_ids.len()
                ),
            });
        }
        refocus.map_err(BackendError::at(BackendStage::Focus))?;
        Ok(())
    }
}
