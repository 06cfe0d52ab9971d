//! Dicebeacon command line entry point.

use std::process::ExitCode;

use clap::Parser;
use dicebeacon_cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Usage errors exit with status 2 inside `parse`.
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the report.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let stdout = std::io::stdout();
    match dicebeacon_cli::run(&args, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
