//! Wrap a test command and condense what it prints.
//!
//! The child's exit status is passed through so the wrapper can stand in for
//! the raw test command in scripts and hooks.
use crate::cli::RunArgs;
use crate::condense::{condense, emit};
use crate::config::CondenseConfig;
use crate::util::{decode_lines, exit_status_string};
use anyhow::{anyhow, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus, Stdio};
use std::time::Instant;

/// Exit code reported when the child ends without one (e.g. killed by a signal).
const NO_EXIT_CODE: u8 = 1;

pub fn run_command(args: RunArgs, config: &CondenseConfig) -> Result<ExitCode> {
    let argv = command_argv(&args.command)?;
    let program = resolve_program(&argv[0])?;

    let start = Instant::now();
    let (raw, status) = run_interleaved(&program, &argv[1..])?;
    let elapsed_ms = start.elapsed().as_millis();

    tracing::info!(
        program = %program.display(),
        elapsed_ms,
        output_bytes = raw.len(),
        status = %exit_status_string(&status),
        "test command finished"
    );

    if let Some(path) = &args.save_raw {
        std::fs::write(path, &raw)
            .with_context(|| format!("write raw output {}", path.display()))?;
    }

    let transcript = condense(&decode_lines(&raw), config);
    let stdout = std::io::stdout();
    emit(&transcript, &mut stdout.lock()).context("write transcript")?;

    Ok(ExitCode::from(child_exit_code(status.code())))
}

/// Run the child with stdout and stderr sharing one pipe, so its output is
/// read back in the order it was written, as with `2>&1`.
fn run_interleaved(program: &Path, args: &[String]) -> Result<(Vec<u8>, ExitStatus)> {
    let (mut reader, writer) = std::io::pipe().context("create output pipe")?;
    let stderr_writer = writer.try_clone().context("clone output pipe")?;
    // The builder owns our copies of the write end and is dropped at the end
    // of this block, so the read below sees EOF once the child exits.
    let mut child = {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer);
        command
            .spawn()
            .with_context(|| format!("spawn test command: {}", program.display()))?
    };

    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .context("read test command output")?;
    let status = child.wait().context("wait for test command")?;
    Ok((raw, status))
}

/// A single argument is treated as a shell-quoted command line.
fn command_argv(command: &[String]) -> Result<Vec<String>> {
    let argv = match command {
        [single] => shell_words::split(single)
            .with_context(|| format!("parse test command: {single}"))?,
        _ => command.to_vec(),
    };
    if !argv.first().is_some_and(|program| !program.is_empty()) {
        return Err(anyhow!("test command is empty"));
    }
    Ok(argv)
}

fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).with_context(|| format!("locate test command: {program}"))
}

fn child_exit_code(code: Option<i32>) -> u8 {
    code.and_then(|code| u8::try_from(code).ok())
        .unwrap_or(NO_EXIT_CODE)
}
