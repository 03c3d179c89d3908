//! Binary-local application orchestration helpers.
//!
//! `main.rs` only parses arguments and exits; the run flow, logging setup,
//! and output formatting live here.

pub(crate) mod entry;
pub(crate) mod logging;
pub(crate) mod report;
