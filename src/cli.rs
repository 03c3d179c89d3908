//! CLI argument parsing via clap.

use clap::{ArgGroup, Parser};
use signal_lamp::switch::ThemeAction;

/// Switch terminal, editor, and scripts between light and dark themes.
#[derive(Debug, Parser)]
#[command(
    name = "signal-lamp",
    version,
    long_version = signal_lamp::build_info::LONG_VERSION,
    group(ArgGroup::new("action").args(["query", "toggle", "set", "list"]))
)]
pub struct Args {
    /// Print the current theme (default when no action is given).
    #[arg(short = 'q', long = "query")]
    pub query: bool,

    /// Switch to the next configured theme.
    #[arg(short = 't', long = "toggle")]
    pub toggle: bool,

    /// Switch to the named theme.
    #[arg(short = 's', long = "set", value_name = "NAME")]
    pub set: Option<String>,

    /// List configured themes, marking the current one.
    #[arg(long = "list")]
    pub list: bool,

    /// Path to config file (default: ~/.config/signal-lamp/signal-lamp.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log debug details to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    pub fn action(&self) -> ThemeAction {
        if let Some(name) = &self.set {
            ThemeAction::Set(name.clone())
        } else if self.toggle {
            ThemeAction::Toggle
        } else if self.list {
            ThemeAction::List
        } else {
            ThemeAction::Query
        }
    }
}
