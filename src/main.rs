use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod condense;
mod config;
mod run;
mod util;

use cli::{Command, GlobalArgs, RootArgs};
use condense::{condense, emit};

fn main() -> Result<ExitCode> {
    let args = RootArgs::parse();
    init_tracing(args.global.verbose);

    let config = config::resolve_config(args.global.config.as_deref())?;
    match args.command {
        Some(Command::Run(run_args)) => {
            if args.global.input.is_some() {
                return Err(anyhow!("--input cannot be combined with run"));
            }
            run::run_command(run_args, &config)
        }
        None => run_filter(&args.global, &config),
    }
}

fn run_filter(args: &GlobalArgs, config: &config::CondenseConfig) -> Result<ExitCode> {
    let lines = util::read_input_lines(args.input.as_deref())?;
    let transcript = condense(&lines, config);
    let stdout = std::io::stdout();
    emit(&transcript, &mut stdout.lock()).context("write transcript")?;
    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr so stdout carries only the transcript.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
