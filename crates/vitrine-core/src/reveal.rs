//! One-shot reveal animation tracking
//!
//! Elements fade in the first time they come into view and then stay
//! visible. The latch only ever moves one way; scrolling an element back
//! out of view never resets it.

use std::collections::HashSet;

use crate::visibility::REVEAL_THRESHOLD;

/// Tracks which reveal targets have animated in
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    revealed: HashSet<String>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one visibility measurement for a reveal target
    ///
    /// Returns `true` the first time the target crosses the reveal
    /// threshold. Already-revealed targets always return `false`; their
    /// ratio no longer matters.
    pub fn observe(&mut self, key: &str, ratio: f64) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        if ratio >= REVEAL_THRESHOLD {
            self.revealed.insert(key.to_string());
            return true;
        }
        false
    }

    /// Whether the target has revealed
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// How many targets have revealed so far
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let latch = RevealLatch::new();
        assert!(!latch.is_revealed("about-item-0"));
        assert_eq!(latch.revealed_count(), 0);
    }

    #[test]
    fn test_reveals_at_threshold() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe("x", 0.05));
        assert!(!latch.is_revealed("x"));
        assert!(latch.observe("x", REVEAL_THRESHOLD));
        assert!(latch.is_revealed("x"));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut latch = RevealLatch::new();
        latch.observe("x", 0.5);
        // Scrolled back out; stays revealed and reports no new reveal.
        assert!(!latch.observe("x", 0.0));
        assert!(latch.is_revealed("x"));
    }

    #[test]
    fn test_targets_are_independent() {
        let mut latch = RevealLatch::new();
        latch.observe("a", 0.9);
        assert!(latch.is_revealed("a"));
        assert!(!latch.is_revealed("b"));
        assert_eq!(latch.revealed_count(), 1);
    }
}
