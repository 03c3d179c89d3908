//! Application entry orchestration for the signal-lamp CLI.

use std::sync::Arc;

use signal_lamp::backends::default_registry;
use signal_lamp::config::{ensure_config_layout, load_config, resolve_paths, ConfigInitResult};
use signal_lamp::error::ConfigError;
use signal_lamp::process::SystemProcessRunner;
use signal_lamp::switch::{resolve_target, switch_theme, ThemeAction};

use crate::app::{logging, report};
use crate::cli::Args;

pub(crate) const EXIT_OK: i32 = 0;
pub(crate) const EXIT_CONFIG_ERROR: i32 = 1;
pub(crate) const EXIT_BACKEND_FAILED: i32 = 2;

/// Run one CLI invocation and return the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    let color = !args.no_color;
    logging::init(args.verbose, color);

    match run_action(&args, color).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", report::error_line(&e.to_string(), color));
            EXIT_CONFIG_ERROR
        }
    }
}

async fn run_action(args: &Args, color: bool) -> Result<i32, ConfigError> {
    let paths = resolve_paths(args.config.as_deref())?;
    // An explicit --config must already exist; only the default location is
    // bootstrapped.
    if args.config.is_none() {
        if let ConfigInitResult::Created { path } = ensure_config_layout(&paths)? {
            eprintln!("created default config at {}", path.display());
        }
    }

    let mut loaded = load_config(&paths)?;
    let action = args.action();
    let Some(theme) = resolve_target(&mut loaded.themes, &action)? else {
        match action {
            ThemeAction::List => {
                for line in report::theme_list_lines(&loaded.themes, color) {
                    println!("{line}");
                }
            }
            _ => println!("{}", report::current_theme_line(&loaded.themes)),
        }
        return Ok(EXIT_OK);
    };

    let runner = Arc::new(SystemProcessRunner::new(loaded.app.command_timeout()));
    let registry = default_registry(&loaded.app, runner);
    let outcome = switch_theme(&loaded.themes, &theme, &registry, &paths.marker_file).await?;

    for line in report::switch_report_lines(&outcome, color) {
        println!("{line}");
    }
    Ok(exit_code_for(outcome.all_ok()))
}

fn exit_code_for(all_ok: bool) -> i32 {
    if all_ok {
        EXIT_OK
    } else {
        EXIT_BACKEND_FAILED
    }
}
