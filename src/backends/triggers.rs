//! User trigger scripts: every file in `triggers/` runs with the theme name.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::backends::ThemeBackend;
use crate::error::{BackendError, BackendStage};
use crate::process::ProcessRunner;

pub struct TriggerScriptsBackend {
    runner: Arc<dyn ProcessRunner>,
    dir: PathBuf,
}

impl TriggerScriptsBackend {
    pub fn new(runner: Arc<dyn ProcessRunner>, dir: PathBuf) -> Self {
        Self { runner, dir }
    }
}

#[async_trait]
impl ThemeBackend for TriggerScriptsBackend {
    async fn apply(&self, theme: &str) -> Result<(), BackendError> {
        let scripts = list_scripts(&self.dir).await.map_err(|e| {
            BackendError::new(
                BackendStage::Triggers,
                format!("could not list {}: {e}", self.dir.display()),
            )
        })?;
        if scripts.is_empty() {
            return Ok(());
        }

        let handles: Vec<_> = scripts
            .into_iter()
            .map(|script| {
                let runner = self.runner.clone();
                let theme = theme.to_string();
                let program = script.to_string_lossy().into_owned();
                tracing::info!(script = %program, "running trigger script");
                let handle =
                    tokio::spawn(async move { runner.run(&program, &[theme.as_str()]).await });
                (script, handle)
            })
            .collect();

        let total = handles.len();
        let mut failures = Vec::new();
        for (script, handle) in handles {
            let outcome = match handle.await {
                Ok(Ok(_)) => Ok(()),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("task failed: {e}")),
            };
            if let Err(err) = outcome {
                tracing::warn!(script = %script.display(), error = %err, "trigger script failed");
                failures.push(format!("{}: {err}", script_name(&script)));
            }
        }

        if failures.is_empty() {
            return Ok(());
        }
        Err(BackendError::new(
            BackendStage::Triggers,
            format!(
                "{} of {total} trigger scripts failed: {}",
                failures.len(),
                failures.join("; ")
            ),
        ))
    }
}

/// Regular files (or links to them) in `dir`, sorted by path.
async fn list_scripts(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut scripts = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        // Follows symlinks; dangling links are skipped.
        if tokio::fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
        {
            scripts.push(path);
        }
    }
    scripts.sort();
    Ok(scripts)
}

fn script_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{ScriptedRunner, TestTempDir};

    #[tokio::test]
    async fn missing_directory_is_success() {
        let tmp = TestTempDir::new("triggers-missing");
        let runner = Arc::new(ScriptedRunner::new());
        let backend = TriggerScriptsBackend::new(runner.clone(), tmp.child("triggers"));

        backend.apply("dark").await.expect("apply");
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn runs_every_script_with_theme_name() {
        let tmp = TestTempDir::new("triggers");
        let a = tmp.write_text("triggers/a-wallpaper", "#!/bin/sh\n");
        let b = tmp.write_text("triggers/b-gtk", "#!/bin/sh\n");
        std::fs::create_dir_all(tmp.child("triggers/not-a-script")).unwrap();
        let runner = Arc::new(ScriptedRunner::new());
        let backend = TriggerScriptsBackend::new(runner.clone(), tmp.child("triggers"));

        backend.apply("dark").await.expect("apply");

        let mut calls = runner.calls();
        calls.sort();
        assert_eq!(
            calls,
            vec![
                format!("{} dark", a.display()),
                format!("{} dark", b.display()),
            ]
        );
    }

    #[tokio::test]
    async fn failing_script_is_reported_without_skipping_others() {
        let tmp = TestTempDir::new("triggers-fail");
        let bad = tmp.write_text("triggers/bad", "");
        tmp.write_text("triggers/good", "");
        let runner = Arc::new(ScriptedRunner::new().fail(&bad.display().to_string(), 3));
        let backend = TriggerScriptsBackend::new(runner.clone(), tmp.child("triggers"));

        let err = backend.apply("light").await.unwrap_err();
        assert_eq!(err.stage, BackendStage::Triggers);
        assert!(err.message.starts_with("1 of 2"), "got: {err}");
        assert!(err.message.contains("bad:"), "got: {err}");
        assert_eq!(runner.calls().len(), 2);
    }
}
