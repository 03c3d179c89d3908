//! Unified error types for signal-lamp.

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading, validating, or persisting configuration.
///
/// Any of these aborts a run before a backend is touched.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
    /// Explicit selection of a theme that is not configured.
    UnknownTheme(String),
    /// Cycling requires at least one configured theme.
    EmptyConfiguration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
            Self::UnknownTheme(name) => write!(f, "unknown theme `{name}`"),
            Self::EmptyConfiguration => write!(f, "no themes are configured"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// Terminal profile dump did not match the expected grammar.
///
/// Each variant names the parsing stage that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was dumped.
    EmptyDump,
    /// The meta block lacks the `default` or `list` line.
    MissingMetaLine(&'static str),
    /// A meta line carries no single-quoted value.
    UnquotedMetaValue(String),
    /// A profile block header is not `[:<uuid>]`.
    BadProfileHeader(String),
    /// A profile block does not end with `visible-name='…'`.
    MissingVisibleName(String),
    /// `visible-name=` is present but its value is not single-quoted.
    UnquotedName(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDump => write!(f, "profile dump is empty"),
            Self::MissingMetaLine(key) => write!(f, "meta block is missing the `{key}` line"),
            Self::UnquotedMetaValue(line) => write!(f, "expected a quoted value in `{line}`"),
            Self::BadProfileHeader(line) => {
                write!(f, "couldn't parse profile identifier from `{line}`")
            }
            Self::MissingVisibleName(header) => {
                write!(f, "expected visible-name as last line of profile {header}")
            }
            Self::UnquotedName(line) => write!(f, "expected a quoted profile name in `{line}`"),
        }
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// HotkeyError
// ---------------------------------------------------------------------------

/// The target profile has no slot in the profile menu ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyError {
    NotFound(String),
}

impl fmt::Display for HotkeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "profile {id} is not in the profile menu ordering"),
        }
    }
}

impl std::error::Error for HotkeyError {}

// ---------------------------------------------------------------------------
// ProcessError
// ---------------------------------------------------------------------------

/// Errors from running an external program.
#[derive(Debug)]
pub enum ProcessError {
    /// The program could not be started or waited on.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The program ran but exited unsuccessfully.
    Exit {
        program: String,
        code: i32,
        details: String,
    },
    /// The program did not finish within the configured limit.
    TimedOut { program: String, after: Duration },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => write!(f, "{program}: {source}"),
            Self::Exit {
                program,
                code,
                details,
            } => {
                if details.is_empty() {
                    write!(f, "{program}: command exited with {code}")
                } else {
                    write!(f, "{program}: exited with {code}: {details}")
                }
            }
            Self::TimedOut { program, after } => write!(
                f,
                "{program}: timed out after {}",
                crate::process::format_duration(*after)
            ),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// BackendError
// ---------------------------------------------------------------------------

/// Step of a backend apply that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStage {
    Dump,
    Parse,
    SetDefault,
    ListWindows,
    Focus,
    Hotkey,
    Window,
    Settings,
    Triggers,
    /// The backend task itself died (panic or runtime shutdown).
    Task,
}

impl BackendStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dump => "dump",
            Self::Parse => "parse",
            Self::SetDefault => "set-default",
            Self::ListWindows => "list-windows",
            Self::Focus => "focus",
            Self::Hotkey => "hotkey",
            Self::Window => "window",
            Self::Settings => "settings",
            Self::Triggers => "triggers",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for BackendStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single backend failed to apply its theme value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub stage: BackendStage,
    pub message: String,
}

impl BackendError {
    pub fn new(stage: BackendStage, cause: impl fmt::Display) -> Self {
        Self {
            stage,
            message: cause.to_string(),
        }
    }

    /// Adapter for `map_err` chains.
    pub fn at<E: fmt::Display>(stage: BackendStage) -> impl FnOnce(E) -> Self {
        move |cause| Self::new(stage, cause)
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.message)
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn config_error_theme_variants() {
        assert_eq!(
            ConfigError::UnknownTheme("dusk".into()).to_string(),
            "unknown theme `dusk`"
        );
        assert_eq!(
            ConfigError::EmptyConfiguration.to_string(),
            "no themes are configured"
        );
    }

    #[test]
    fn process_error_exit_prefers_details() {
        let e = ProcessError::Exit {
            program: "dconf".into(),
            code: 1,
            details: "error: no such key".into(),
        };
        assert_eq!(e.to_string(), "dconf: exited with 1: error: no such key");

        let bare = ProcessError::Exit {
            program: "wmctrl".into(),
            code: 2,
            details: String::new(),
        };
        assert_eq!(bare.to_string(), "wmctrl: command exited with 2");
    }

    #[test]
    fn process_error_timeout_uses_human_units() {
        let e = ProcessError::TimedOut {
            program: "xdotool".into(),
            after: Duration::from_secs(10),
        };
        assert_eq!(e.to_string(), "xdotool: timed out after 10s");
    }

    #[test]
    fn backend_error_display_names_stage() {
        let e = BackendError::new(BackendStage::SetDefault, "gsettings: command exited with 1");
        assert_eq!(
            e.to_string(),
            "set-default: gsettings: command exited with 1"
        );
    }

    #[test]
    fn backend_error_at_wraps_cause() {
        let wrap = BackendError::at(BackendStage::Parse);
        let e = wrap(ParseError::EmptyDump);
        assert_eq!(e.stage, BackendStage::Parse);
        assert_eq!(e.message, "profile dump is empty");
    }
}
