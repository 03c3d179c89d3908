//! Shared test fixtures for config, backend, and dispatch test modules.
//!
//! Keeps temp-dir handling and scripted process output in one place so each
//! test module does not rebuild them.

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ProcessError;
use crate::process::ProcessRunner;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "signal-lamp-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Canned result for commands whose rendered line starts with a prefix.
enum Reply {
    Stdout(String),
    Exit(i32),
}

/// [`ProcessRunner`] that records every call and answers from a script.
///
/// Calls are rendered as `program arg arg…`. The first registered prefix
/// matching a call decides its reply; unmatched calls succeed with empty
/// stdout.
#[derive(Default)]
pub struct ScriptedRunner {
    replies: Vec<(String, Reply)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls starting with `prefix` with `stdout`.
    pub fn respond(mut self, prefix: &str, stdout: &str) -> Self {
        self.replies
            .push((prefix.to_string(), Reply::Stdout(stdout.to_string())));
        self
    }

    /// Fail calls starting with `prefix` with exit status `code`.
    pub fn fail(mut self, prefix: &str, code: i32) -> Self {
        self.replies.push((prefix.to_string(), Reply::Exit(code)));
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessError> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.lock().expect("calls lock").push(line.clone());

        match self
            .replies
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
        {
            Some((_, Reply::Stdout(stdout))) => Ok(stdout.clone()),
            Some((_, Reply::Exit(code))) => Err(ProcessError::Exit {
                program: program.to_string(),
                code: *code,
                details: "scripted failure".to_string(),
            }),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[tokio::test]
    async fn scripted_runner_records_calls_and_matches_prefixes() {
        let runner = ScriptedRunner::new()
            .respond("wmctrl -lx", "0x1 0 a.B host t\n")
            .fail("xdotool", 2);

        assert_eq!(runner.run("wmctrl", &["-lx"]).await.unwrap(), "0x1 0 a.B host t\n");
        assert!(runner.run("xdotool", &["getwindowfocus"]).await.is_err());
        assert_eq!(runner.run("dconf", &["dump", "/"]).await.unwrap(), "");
        assert_eq!(
            runner.calls(),
            vec!["wmctrl -lx", "xdotool getwindowfocus", "dconf dump /"]
        );
    }
}
