use std::io::{self, Write};

const ELAPSED_PREFIX: &str = "Took ";

/// Which lines are held back from the printed transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// Hide the runner's elapsed-time line.
    Elapsed,
    /// Print every line.
    None,
}

impl Suppression {
    fn hides(self, line: &str) -> bool {
        match self {
            Suppression::Elapsed => line.starts_with(ELAPSED_PREFIX),
            Suppression::None => false,
        }
    }
}

/// Drop suppressed lines, keeping order and empty lines.
pub fn visible_lines(lines: Vec<String>, suppression: Suppression) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !suppression.hides(line))
        .collect()
}

/// Write each line as one newline-terminated record.
///
/// Suppression is already applied by [`visible_lines`]; every line given here
/// is printed, empty ones included.
pub fn emit<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
