//! VS Code backend: rewrites the color-theme key in the user `settings.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::backends::ThemeBackend;
use crate::config::EditorSettings;
use crate::error::{BackendError, BackendStage};

pub struct VsCodeBackend {
    settings: EditorSettings,
}

impl VsCodeBackend {
    pub fn new(settings: EditorSettings) -> Self {
        Self { settings }
    }

    fn settings_path(&self) -> Option<PathBuf> {
        self.settings.settings_path.clone().or_else(|| {
            dirs::config_dir().map(|dir| dir.join("Code").join("User").join("settings.json"))
        })
    }
}

#[async_trait]
impl ThemeBackend for VsCodeBackend {
    async fn apply(&self, color_theme: &str) -> Result<(), BackendError> {
        let path = self.settings_path().ok_or_else(|| {
            BackendError::new(
                BackendStage::Settings,
                "unable to resolve the VS Code settings.json path",
            )
        })?;

        let existing = match tokio::fs::read_to_string(&path).await {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(BackendError::new(
                    BackendStage::Settings,
                    format!("could not read {}: {e}", path.display()),
                ))
            }
        };

        let Some(updated) = set_settings_key(existing.as_deref(), &self.settings.key, color_theme)
            .map_err(|msg| {
                BackendError::new(BackendStage::Settings, format!("{}: {msg}", path.display()))
            })?
        else {
            tracing::info!(theme = color_theme, "editor theme already set, not rewriting");
            return Ok(());
        };

        write_atomically(&path, &updated).await.map_err(|e| {
            BackendError::new(
                BackendStage::Settings,
                format!("could not write {}: {e}", path.display()),
            )
        })?;
        tracing::info!(theme = color_theme, path = %path.display(), "set editor color theme");
        Ok(())
    }
}

/// Set `key` to `value` in a settings document, keeping other keys in place.
///
/// Returns `Ok(None)` when the document already holds that value.
fn set_settings_key(existing: Option<&str>, key: &str, value: &str) -> Result<Option<String>, String> {
    let mut root = match existing.map(str::trim) {
        None | Some("") => Map::new(),
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err("settings root is not a JSON object".to_string()),
            Err(e) => return Err(format!("invalid JSON: {e}")),
        },
    };

    if root.get(key).and_then(Value::as_str) == Some(value) {
        return Ok(None);
    }
    root.insert(key.to_string(), Value::String(value.to_string()));

    // VS Code writes its settings with 4-space indentation.
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(&Value::Object(root), &mut serializer)
        .map_err(|e| format!("could not serialize settings: {e}"))?;
    buf.push(b'\n');
    String::from_utf8(buf)
        .map(Some)
        .map_err(|e| format!("could not serialize settings: {e}"))
}

/// Replace `path` via a sibling temp file so readers never see half a file.
async fn write_atomically(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "settings.json".to_string());
    let tmp = path.with_file_name(format!(".{file_name}.signal-lamp.tmp"));
    tokio::fs::write(&tmp, content).await?;
    tokio::fs::rename(&tmp, path).await
}
