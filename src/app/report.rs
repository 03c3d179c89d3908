//! Human-readable output for queries and switch results.

use crossterm::style::{Color, Stylize};
use signal_lamp::dispatch::DispatchResult;
use signal_lamp::switch::SwitchReport;
use signal_lamp::theme::ThemeConfig;

/// Line printed for `--query`.
pub(crate) fn current_theme_line(themes: &ThemeConfig) -> String {
    themes.current().unwrap_or("(none)").to_string()
}

/// Lines printed for `--list`: every theme, the current one starred.
pub(crate) fn theme_list_lines(themes: &ThemeConfig, color: bool) -> Vec<String> {
    let current = themes.current();
    themes
        .theme_names()
        .iter()
        .map(|name| {
            if Some(name.as_str()) == current {
                if color {
                    format!("{} {}", "*".with(Color::Green), name.as_str().bold())
                } else {
                    format!("* {name}")
                }
            } else {
                format!("  {name}")
            }
        })
        .collect()
}

/// Summary plus one line per backend.
pub(crate) fn switch_report_lines(report: &SwitchReport, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.results.len() + 1);
    let failed = report.failures().count();
    let headline = if failed == 0 {
        format!("switched to {}", report.theme)
    } else {
        format!(
            "switched to {} ({failed} of {} backends failed)",
            report.theme,
            report.results.len()
        )
    };
    lines.push(if color {
        if failed == 0 {
            headline.with(Color::Green).to_string()
        } else {
            headline.with(Color::Yellow).to_string()
        }
    } else {
        headline
    });
    lines.extend(report.results.iter().map(|result| backend_line(result, color)));
    lines
}

fn backend_line(result: &DispatchResult, color: bool) -> String {
    let name = result.backend.as_str();
    match (&result.error, color) {
        (None, true) => format!("  {} {name}", "ok".with(Color::Green)),
        (None, false) => format!("  ok {name}"),
        (Some(err), true) => format!("  {} {name}: {err}", "failed".with(Color::Red).bold()),
        (Some(err), false) => format!("  failed {name}: {err}"),
    }
}

/// Render a configuration error for stderr.
pub(crate) fn error_line(message: &str, color: bool) -> String {
    if color {
        format!("{} {message}", "error:".with(Color::Red).bold())
    } else {
        format!("error: {message}")
    }
}
