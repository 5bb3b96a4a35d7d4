use clap::Parser as _;
use sovparse::cli::{Cli, run};
use std::{io, process::ExitCode};
use tracing_subscriber::EnvFilter;
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(print_err) = e.print() {
                eprintln!("{print_err}");
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(&cli, &mut io::stdout().lock()) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            eprintln!("sovparse: {e}");
            ExitCode::FAILURE
        }
    }
}
