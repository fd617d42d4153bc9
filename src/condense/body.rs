//! Per-line reduction of the transcript body.
//!
//! Feature headers are held back until the first scenario or failed step under
//! them shows up, so features that only ran backgrounds and passing steps
//! vanish entirely. A failed step opens an error block that is copied verbatim
//! up to and including the next blank line.
use super::NoiseFilter;

const FEATURE_PREFIX: &str = "Feature:";
const SCENARIO_PREFIX: &str = "Scenario:";
const FAILED_STEP_MARKER: &str = "... failed";
const STATUS_SEPARATOR: &str = "...";
const SCENARIO_INDENT: &str = "  ";

/// Whether lines are being captured after a failed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ErrorBlock {
    #[default]
    Idle,
    Capturing,
}

/// A feature header waiting for its first interesting line.
#[derive(Debug)]
struct PendingFeature {
    header: String,
    /// Set once a scenario or failed step was seen; the header is written at
    /// that moment and never again.
    active: bool,
}

#[derive(Debug, Default)]
struct BodyReducer {
    feature: Option<PendingFeature>,
    error_block: ErrorBlock,
    out: Vec<String>,
    dropped_features: usize,
}

impl BodyReducer {
    fn push_line(&mut self, line: &str, noise: &NoiseFilter) {
        if noise.is_noise(line) {
            return;
        }

        if self.error_block == ErrorBlock::Capturing {
            self.out.push(line.to_string());
            if line.is_empty() {
                self.error_block = ErrorBlock::Idle;
            }
            return;
        }

        if line.starts_with(FEATURE_PREFIX) {
            self.start_feature(line);
        } else if line.starts_with(SCENARIO_PREFIX) {
            self.mark_active();
            let title = scenario_title(line);
            self.out.push(format!("{SCENARIO_INDENT}{title}"));
        } else if line.contains(FAILED_STEP_MARKER) {
            self.mark_active();
            self.out.push(line.to_string());
            self.error_block = ErrorBlock::Capturing;
        }
        // Backgrounds, passing steps and stray blank lines are dropped.
    }

    fn start_feature(&mut self, header: &str) {
        if let Some(previous) = self.feature.take() {
            if !previous.active {
                tracing::debug!(feature = %previous.header, "dropping feature without scenarios");
                self.dropped_features += 1;
            }
        }
        self.feature = Some(PendingFeature {
            header: header.to_string(),
            active: false,
        });
        // An unterminated block from a truncated feature must not leak into
        // the next one.
        self.error_block = ErrorBlock::Idle;
    }

    /// Write the pending header the first time content appears under it.
    fn mark_active(&mut self) {
        if let Some(feature) = self.feature.as_mut() {
            if !feature.active {
                self.out.push(feature.header.clone());
                feature.active = true;
            }
        }
    }

    fn finish(mut self) -> Vec<String> {
        if let Some(feature) = self.feature.take() {
            if !feature.active {
                self.dropped_features += 1;
            }
        }
        if self.error_block == ErrorBlock::Capturing {
            tracing::debug!("error block ran to the end of the body");
        }
        tracing::debug!(
            dropped_features = self.dropped_features,
            "reduced transcript body"
        );
        self.out
    }
}

/// Title of a scenario line, without the runner's trailing status.
fn scenario_title(line: &str) -> &str {
    line.split_once(STATUS_SEPARATOR)
        .map_or(line, |(title, _)| title)
        .trim()
}

/// Reduce the lines before the summary boundary to the condensed body.
pub fn reduce_body(lines: &[String], noise: &NoiseFilter) -> Vec<String> {
    let mut reducer = BodyReducer::default();
    for line in lines {
        reducer.push_line(line, noise);
    }
    reducer.finish()
}

#[cfg(test)]
#[path = "body_tests.rs"]
mod tests;
