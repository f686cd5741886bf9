use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use tracelane::TracelaneError;
use tracelane_cli::{Args, ErrorAdapter};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match tracelane_cli::run(&args) {
        Ok(()) => {
            info!(trace_id = args.trace_id; "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to render trace `{}`\n{}", args.trace_id, report(&err));
            if err.is_retryable() {
                warn!(store = args.store; "The trace store may recover; the same command can be retried");
            }
            ExitCode::FAILURE
        }
    }
}

/// Falls back to `warn` for an unrecognized level; `RUST_LOG` still applies on top.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level `{level}`, using `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}

fn report(err: &TracelaneError) -> String {
    let mut rendered = String::new();
    if miette::GraphicalReportHandler::new()
        .render_report(&mut rendered, &ErrorAdapter(err))
        .is_err()
    {
        rendered = err.to_string();
    }
    rendered
}
