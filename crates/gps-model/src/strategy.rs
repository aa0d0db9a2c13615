//! Refactor-timing strategies
//!
//! A [`Strategy`] decides when, if ever, the single refactor happens. For
//! `F` features the strategy space is [`Strategy::NoRefactor`] followed by
//! [`Strategy::RefactorBeforeFeature`]`(k)` for `k = 2..=F`. There is no
//! "refactor before feature 1": the first feature lands in a greenfield
//! codebase with nothing to refactor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy for the one refactor event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "feature", rename_all = "snake_case")]
pub enum Strategy {
    /// Never refactor; every feature pays the compounded rate
    NoRefactor,

    /// Refactor immediately before building feature `k` (1-indexed)
    ///
    /// Only `k >= 2` names a real refactor slot. `k < 2` is treated as
    /// absent and costs exactly like [`Strategy::NoRefactor`].
    RefactorBeforeFeature(usize),
}

impl Strategy {
    /// 0-indexed position at which the refactor is paid
    ///
    /// `None` for [`Strategy::NoRefactor`] and for the slot-less
    /// `RefactorBeforeFeature(0 | 1)`.
    #[inline]
    #[must_use]
    pub fn refactor_position(self) -> Option<usize> {
        match self {
            Self::RefactorBeforeFeature(k) if k >= 2 => Some(k - 1),
            _ => None,
        }
    }

    /// Index of this strategy in evaluation order
    #[inline]
    #[must_use]
    pub fn ordinal(self) -> usize {
        self.refactor_position().unwrap_or(0)
    }

    /// Whether this strategy ever refactors
    #[inline]
    #[must_use]
    pub fn refactors(self) -> bool {
        self.refactor_position().is_some()
    }

    /// Strategies for `feature_count` features, in evaluation order
    #[must_use]
    pub fn enumerate(feature_count: usize) -> StrategyIter {
        StrategyIter {
            next: 0,
            count: feature_count,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRefactor => f.write_str("no refactor"),
            Self::RefactorBeforeFeature(k) => write!(f, "refactor before feature {k}"),
        }
    }
}

/// Iterator returned by [`Strategy::enumerate`]
#[derive(Debug, Clone)]
pub struct StrategyIter {
    next: usize,
    count: usize,
}

impl Iterator for StrategyIter {
    type Item = Strategy;

    fn next(&mut self) -> Option<Strategy> {
        if self.next >= self.count {
            return None;
        }
        let strategy = match self.next {
            0 => Strategy::NoRefactor,
            slot => Strategy::RefactorBeforeFeature(slot + 1),
        };
        self.next += 1;
        Some(strategy)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StrategyIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerate_zero_is_empty() {
        assert_eq!(Strategy::enumerate(0).count(), 0);
    }

    #[test]
    fn enumerate_one_is_no_refactor_only() {
        let all: Vec<_> = Strategy::enumerate(1).collect();
        assert_eq!(all, vec![Strategy::NoRefactor]);
    }

    #[test]
    fn enumerate_orders_by_refactor_point() {
        let all: Vec<_> = Strategy::enumerate(4).collect();
        assert_eq!(
            all,
            vec![
                Strategy::NoRefactor,
                Strategy::RefactorBeforeFeature(2),
                Strategy::RefactorBeforeFeature(3),
                Strategy::RefactorBeforeFeature(4),
            ]
        );
        assert_eq!(Strategy::enumerate(4).len(), 4);
    }

    #[test]
    fn ordinal_matches_enumeration_index() {
        for (i, s) in Strategy::enumerate(6).enumerate() {
            assert_eq!(s.ordinal(), i);
        }
    }

    #[test]
    fn refactor_position_is_zero_indexed() {
        assert_eq!(Strategy::NoRefactor.refactor_position(), None);
        assert_eq!(Strategy::RefactorBeforeFeature(2).refactor_position(), Some(1));
        assert!(!Strategy::NoRefactor.refactors());
        assert!(Strategy::RefactorBeforeFeature(3).refactors());
    }

    #[test]
    fn slotless_refactor_behaves_like_no_refactor() {
        for k in [0, 1] {
            let s = Strategy::RefactorBeforeFeature(k);
            assert_eq!(s.refactor_position(), None);
            assert!(!s.refactors());
            assert_eq!(s.ordinal(), Strategy::NoRefactor.ordinal());
        }
    }

    #[test]
    fn display() {
        assert_eq!(Strategy::NoRefactor.to_string(), "no refactor");
        assert_eq!(
            Strategy::RefactorBeforeFeature(3).to_string(),
            "refactor before feature 3"
        );
    }
}
