//! Series labels
//!
//! `NoRefactor` is "No Refactor"; `RefactorBeforeFeature(k)` reads
//! "Refactor with second feature", "Refactor with third feature", and so on,
//! switching to numeric ordinals ("21st") past twenty.

use gps_model::Strategy;

const ORDINAL_WORDS: [&str; 20] = [
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
];

/// Legend label for a strategy
#[must_use]
pub fn series_label(strategy: Strategy) -> String {
    match strategy {
        Strategy::NoRefactor => "No Refactor".to_string(),
        Strategy::RefactorBeforeFeature(k) => format!("Refactor with {} feature", ordinal(k)),
    }
}

/// English ordinal for a 1-indexed position
#[must_use]
pub fn ordinal(n: usize) -> String {
    if let Some(word) = n.checked_sub(1).and_then(|i| ORDINAL_WORDS.get(i)) {
        return (*word).to_string();
    }

    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
