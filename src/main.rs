use clap::Parser;
use scan_gate::{Cli, EXIT_INPUT_ERROR, run::run};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("scan-gate: {e}");
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "scan_gate=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
