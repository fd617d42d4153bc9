use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use std::process::ExitStatus;

/// Split raw runner output into trimmed lines.
///
/// Invalid UTF-8 is replaced rather than rejected, and a trailing newline
/// does not produce an extra empty line.
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

pub fn read_input_lines(path: Option<&Path>) -> Result<Vec<String>> {
    let bytes = match path {
        Some(path) => std::fs::read(path).with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("read stdin")?;
            bytes
        }
    };
    Ok(decode_lines(&bytes))
}

pub fn exit_status_string(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exit code {code}");
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("signal {signal}");
        }
    }
    "unknown status".to_string()
}
