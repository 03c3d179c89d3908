//! Injects the commit and build time shown by `signal-lamp --version`.
//!
//! Both can be pinned from the environment for packaging; otherwise they are
//! derived from git and the clock, with "unknown" when git is unavailable.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "SIGNAL_LAMP_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "SIGNAL_LAMP_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Some(reference) = current_branch_ref() {
        println!("cargo:rerun-if-changed=.git/{reference}");
    }
    for var in [GIT_HASH_VAR, TIMESTAMP_VAR, "SOURCE_DATE_EPOCH"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let commit = env::var(GIT_HASH_VAR).unwrap_or_else(|_| describe_commit());
    let built = env::var(TIMESTAMP_VAR).unwrap_or_else(|_| build_time());

    println!("cargo:rustc-env={GIT_HASH_VAR}={commit}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={built}");
}

fn current_branch_ref() -> Option<String> {
    let head = fs::read_to_string(".git/HEAD").ok()?;
    head.trim().strip_prefix("ref: ").map(str::to_string)
}

/// Short hash, suffixed with `-dirty` for uncommitted changes.
fn describe_commit() -> String {
    command_output("git", &["describe", "--always", "--dirty", "--abbrev=12"])
        .unwrap_or_else(|| "unknown".to_string())
}

/// Seconds since the epoch, honoring `SOURCE_DATE_EPOCH` for reproducible builds.
fn build_time() -> String {
    let secs = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or(0)
        });
    command_output("date", &["-u", "-d", &format!("@{secs}"), "+%Y-%m-%dT%H:%M:%SZ"])
        .unwrap_or_else(|| format!("unix:{secs}"))
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
