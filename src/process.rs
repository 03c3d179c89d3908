//! External process execution shared by the theme backends.
//!
//! Backends never spawn programs directly; they go through [`ProcessRunner`]
//! so tests can script command output without a live desktop session.

use crate::error::ProcessError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

/// Run a program with arguments and return its captured stdout.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Execute `program` and wait for it. Non-zero exit is an error.
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessError>;
}

/// Captured output of a finished process.
#[derive(Debug)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// [`ProcessRunner`] backed by real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner {
    limit: Option<Duration>,
}

impl SystemProcessRunner {
    /// Build a runner; `None` waits for every command indefinitely.
    pub fn new(limit: Option<Duration>) -> Self {
        Self { limit }
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessError> {
        tracing::debug!(program, ?args, "running command");
        let output = match self.limit {
            None => run_process(program, args).await?,
            Some(limit) => match timeout(limit, run_process(program, args)).await {
                Ok(out) => out?,
                Err(_) => {
                    return Err(ProcessError::TimedOut {
                        program: program.to_string(),
                        after: limit,
                    })
                }
            },
        };
        ensure_success(program, output).map(|out| out.stdout)
    }
}

/// Spawn and wait for a process, capturing stdout and stderr.
pub async fn run_process(program: &str, args: &[&str]) -> Result<ExecOutput, ProcessError> {
    let mut cmd = Command::new(program);
    // A timed-out future is dropped; take the child down with it.
    cmd.kill_on_drop(true);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = cmd
        .output()
        .await
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert non-zero exit status into a contextual process error.
pub fn ensure_success(program: &str, output: ExecOutput) -> Result<ExecOutput, ProcessError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };

    Err(ProcessError::Exit {
        program: program.to_string(),
        code: output.exit_code,
        details,
    })
}

/// Human-oriented duration formatting used in error messages.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    if secs == 0 {
        return format!("{millis}ms");
    }
    if millis == 0 {
        if secs % 3600 == 0 {
            return format!("{}h", secs / 3600);
        }
        if secs % 60 == 0 {
            return format!("{}m", secs / 60);
        }
        return format!("{secs}s");
    }
    format!("{secs}.{millis:03}s")
}
