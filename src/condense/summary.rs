use super::NoiseFilter;

/// Copy the summary section through, dropping only noise lines.
pub fn pass_summary(lines: &[String], noise: &NoiseFilter) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !noise.is_noise(line))
        .cloned()
        .collect()
}
