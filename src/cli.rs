//! CLI argument parsing.
//!
//! Without a subcommand the tool is a plain filter: behave output in on stdin,
//! condensed transcript out on stdout.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "behave-condense",
    version,
    about = "Condense behave test output into a compact transcript",
    after_help = "Examples:\n  python manage.py behave 2>&1 | behave-condense\n  behave-condense --input behave.log\n  behave-condense run -- python manage.py behave --no-capture\n  behave-condense run --save-raw /tmp/behave.log \"behave features/login.feature\""
)]
pub struct RootArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Read runner output from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Config JSON (defaults to $BEHAVE_CONDENSE_CONFIG or the user config dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a test command and print its condensed output
    Run(RunArgs),
}

/// Run command inputs for wrapping a test invocation.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Also write the raw, uncondensed output to this file
    #[arg(long, value_name = "PATH")]
    pub save_raw: Option<PathBuf>,

    /// Command to run, as separate arguments or one shell-quoted string
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
