use std::collections::HashSet;

use super::config::SimilarityMode;

/// Number of submitted entries found in the reference stack, ignoring case.
/// Duplicate submissions count once each.
///
/// Case folding uses Unicode lowercasing, which differs from an ordinal
/// upper-case comparison for a handful of code points (e.g. the Kelvin sign).
pub(crate) fn matching_entries(submitted: &[String], reference: &[String]) -> usize {
    let known: HashSet<String> = reference.iter().map(|tech| tech.to_lowercase()).collect();

    submitted
        .iter()
        .filter(|entry| known.contains(&entry.to_lowercase()))
        .count()
}

pub(crate) fn similarity(submitted: &[String], reference: &[String], mode: SimilarityMode) -> u32 {
    if reference.is_empty() {
        return 0;
    }

    let matches = matching_entries(submitted, reference);
    let percent = match mode {
        SimilarityMode::Truncated => (matches / reference.len()) * 100,
        SimilarityMode::Proportional => matches * 100 / reference.len(),
    };

    u32::try_from(percent).unwrap_or(u32::MAX)
}
