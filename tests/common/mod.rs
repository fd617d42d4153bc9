//! Shared helpers for driving the compiled binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_behave-condense")
}

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[allow(dead_code)]
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("read fixture")
}

/// Base command isolated from any user-level config or log filter.
pub fn command() -> Command {
    let mut cmd = Command::new(bin());
    cmd.env_remove("BEHAVE_CONDENSE_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("behave-condense-tests"))
        .env("HOME", std::env::temp_dir().join("behave-condense-tests"));
    cmd
}

/// Run the binary with `args`, feeding `stdin` and collecting all output.
#[allow(dead_code)]
pub fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn behave-condense");
    let mut pipe = child.stdin.take().expect("child stdin");
    // The binary may exit before reading input (e.g. on a bad config).
    if let Err(err) = pipe.write_all(stdin.as_bytes()) {
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe, "write stdin: {err}");
    }
    drop(pipe);
    child.wait_with_output().expect("wait for behave-condense")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[allow(dead_code)]
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
