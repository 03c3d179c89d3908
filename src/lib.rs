//! signal-lamp: switch the desktop between named light/dark themes.
//!
//! A theme bundles one value per backend (a GNOME Terminal profile name, a
//! VS Code color theme, ...). Switching fans the values out to every
//! registered backend concurrently, then remembers the choice so the next
//! toggle moves on from it.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use signal_lamp::backends::default_registry;
//! use signal_lamp::config::{load_config, resolve_paths};
//! use signal_lamp::process::SystemProcessRunner;
//! use signal_lamp::switch::{resolve_target, switch_theme, ThemeAction};
//!
//! # async fn example() -> Result<(), signal_lamp::error::ConfigError> {
//! let paths = resolve_paths(None)?;
//! let mut loaded = load_config(&paths)?;
//! let runner = Arc::new(SystemProcessRunner::new(loaded.app.command_timeout()));
//! let registry = default_registry(&loaded.app, runner);
//! if let Some(theme) = resolve_target(&mut loaded.themes, &ThemeAction::Toggle)? {
//!     let report = switch_theme(&loaded.themes, &theme, &registry, &paths.marker_file).await?;
//!     println!("{} ({} failed)", report.theme, report.failures().count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod build_info;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod process;
pub mod switch;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
