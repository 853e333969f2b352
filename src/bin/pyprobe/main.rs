//! pyprobe CLI - Print build flags for compiling native code against Python

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use pyprobe::util::errors::ProbeError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging; stdout is reserved for the JSON document
    let filter = if cli.verbose {
        EnvFilter::new("pyprobe=debug")
    } else {
        EnvFilter::new("pyprobe=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        None => commands::probe::execute(cli.probe),
    }
}

fn report(e: &anyhow::Error) {
    match e.downcast_ref::<ProbeError>() {
        Some(probe_err) => eprintln!("{}", probe_err.render()),
        None => eprintln!("error: an unexpected error occurred: {:#}", e),
    }
}
