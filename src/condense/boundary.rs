const SUMMARY_PREFIXES: [&str; 2] = ["Failing scenarios:", "Took "];
const SUMMARY_FRAGMENTS: [&str; 3] = ["features passed", "scenario passed", "steps passed"];

/// Index of the first line of the trailing summary, or `lines.len()` when the
/// runner never printed one.
pub fn locate_summary_start(lines: &[String]) -> usize {
    lines
        .iter()
        .position(|line| is_summary_marker(line))
        .unwrap_or(lines.len())
}

fn is_summary_marker(line: &str) -> bool {
    SUMMARY_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
        || SUMMARY_FRAGMENTS
            .iter()
            .any(|fragment| line.contains(fragment))
}
