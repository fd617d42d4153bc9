//! Condensing of behave runner output.
//!
//! The transcript is built in two passes: one scan to find where the trailing
//! summary starts, then a per-line reduction of everything before it. Lines
//! from the summary onwards are copied through with only noise removed.
mod body;
mod boundary;
mod emit;
mod summary;

pub use body::reduce_body;
pub use boundary::locate_summary_start;
pub use emit::{emit, visible_lines, Suppression};
pub use summary::pass_summary;

use crate::config::CondenseConfig;

/// Line prefixes that never reach the transcript.
const BUILTIN_NOISE_PREFIXES: [&str; 2] = ["Creating test database", "Destroying test database"];

/// Prefixes of fixture setup/teardown lines that are dropped everywhere.
///
/// The built-in database prefixes are always present; configuration can only
/// add to them.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    prefixes: Vec<String>,
}

impl NoiseFilter {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prefixes: Vec<String> = BUILTIN_NOISE_PREFIXES
            .iter()
            .map(|prefix| prefix.to_string())
            .collect();
        for prefix in extra {
            let prefix = prefix.into();
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
        Self { prefixes }
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

/// Condense a full runner transcript into the lines that would be printed.
///
/// Total over any input: an empty sequence yields an empty transcript and a
/// missing summary leaves the whole input as body.
pub fn condense(lines: &[String], config: &CondenseConfig) -> Vec<String> {
    let noise = config.noise_filter();
    let boundary = locate_summary_start(lines);
    let (body_lines, summary_lines) = lines.split_at(boundary);

    let mut combined = reduce_body(body_lines, &noise);
    let body_len = combined.len();
    combined.extend(pass_summary(summary_lines, &noise));

    tracing::debug!(
        input_lines = lines.len(),
        boundary,
        body_lines = body_len,
        summary_lines = combined.len() - body_len,
        "condensed behave output"
    );

    visible_lines(combined, config.suppression())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn empty_input_condenses_to_nothing() {
        assert!(condense(&[], &CondenseConfig::default()).is_empty());
    }

    #[test]
    fn failed_step_error_block_is_kept_until_blank_line() {
        let input = lines(&[
            "Feature: F",
            "Scenario: S ... failed",
            "Step A ... failed",
            "  Traceback detail 1",
            "  Traceback detail 2",
            "",
            "Step B ... passed",
            "0 features passed, 1 failed, 0 skipped",
        ]);
        let output = condense(&input, &CondenseConfig::default());
        assert_eq!(
            output,
            lines(&[
                "Feature: F",
                "  Scenario: S",
                "Step A ... failed",
                "  Traceback detail 1",
                "  Traceback detail 2",
                "",
                "0 features passed, 1 failed, 0 skipped",
            ])
        );
        assert!(!output.iter().any(|line| line == "Step B ... passed"));
    }

    #[test]
    fn feature_without_scenarios_is_dropped() {
        let input = lines(&[
            "Feature: F",
            "Background: setup",
            "Step ... passed",
            "Feature: G",
            "Scenario: S2 ... passed",
            "2 features passed, 0 failed, 0 skipped",
        ]);
        let output = condense(&input, &CondenseConfig::default());
        assert_eq!(
            output,
            lines(&[
                "Feature: G",
                "  Scenario: S2",
                "2 features passed, 0 failed, 0 skipped",
            ])
        );
    }

    #[test]
    fn elapsed_line_is_hidden_wherever_it_appears() {
        let input = lines(&[
            "Feature: F",
            "Scenario: S ... failed",
            "Step ... failed",
            "Took 3.2s",
            "",
            "Took 3.2s",
        ]);
        let output = condense(&input, &CondenseConfig::default());
        assert!(!output.iter().any(|line| line == "Took 3.2s"));
        assert_eq!(
            output,
            lines(&["Feature: F", "  Scenario: S", "Step ... failed", ""])
        );
    }

    #[test]
    fn keep_elapsed_config_prints_elapsed_line() {
        let config = CondenseConfig {
            keep_elapsed: true,
            ..CondenseConfig::default()
        };
        let input = lines(&["2 steps passed, 0 failed", "Took 0m1.5s"]);
        assert_eq!(condense(&input, &config), input);
    }

    #[test]
    fn extra_noise_prefixes_are_dropped_in_body_and_summary() {
        let config = CondenseConfig {
            extra_noise_prefixes: vec!["System check".to_string()],
            ..CondenseConfig::default()
        };
        let input = lines(&[
            "Feature: F",
            "Scenario: S ... failed",
            "Step ... failed",
            "System check identified no issues",
            "AssertionError",
            "",
            "Failing scenarios:",
            "System check identified no issues",
            "  f.feature:3  S",
        ]);
        assert_eq!(
            condense(&input, &config),
            lines(&[
                "Feature: F",
                "  Scenario: S",
                "Step ... failed",
                "AssertionError",
                "",
                "Failing scenarios:",
                "  f.feature:3  S",
            ])
        );
    }

    #[test]
    fn summary_alone_is_reproduced_without_noise_or_elapsed() {
        let summary = lines(&[
            "Failing scenarios:",
            "  login.feature:12  Login fails",
            "",
            "0 features passed, 1 failed, 0 skipped",
            "Destroying test database for alias 'default'...",
            "3 scenarios passed, 1 failed, 0 skipped",
            "Took 0m2.114s",
        ]);
        let output = condense(&summary, &CondenseConfig::default());
        let expected: Vec<String> = summary
            .iter()
            .filter(|line| !line.starts_with("Destroying") && !line.starts_with("Took "))
            .cloned()
            .collect();
        assert_eq!(output, expected);
    }

    #[test]
    fn noise_filter_keeps_builtins_and_deduplicates_extras() {
        let filter = NoiseFilter::new(["Creating test database", "Loading fixtures"]);
        assert!(filter.is_noise("Creating test database for alias 'default'..."));
        assert!(filter.is_noise("Destroying test database for alias 'default'..."));
        assert!(filter.is_noise("Loading fixtures from app"));
        assert!(!filter.is_noise("Scenario: Creating test database"));
        assert_eq!(filter.prefixes.len(), 3);
    }
}
