//! Matchbox: the multiset of reinforced candidate moves for one board state

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{types::Move, utils};

/// Candidate moves for a board state, as bead counts per move.
///
/// Counts are unsigned and removal saturates, so a matchbox can never hold a
/// negative number of beads. Moves whose count drops to zero are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchbox {
    beads: BTreeMap<Move, u32>,
}

impl Matchbox {
    /// Create an empty matchbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matchbox from (move, count) pairs; zero counts are skipped.
    pub fn from_counts(counts: impl IntoIterator<Item = (Move, u32)>) -> Self {
        let mut matchbox = Self::new();
        for (square, count) in counts {
            matchbox.add(square, count);
        }
        matchbox
    }

    /// Add `copies` beads for `square`.
    pub fn add(&mut self, square: Move, copies: u32) {
        if copies == 0 {
            return;
        }
        let count = self.beads.entry(square).or_insert(0);
        *count = count.saturating_add(copies);
    }

    /// Remove up to `copies` beads for `square`, returning how many were removed.
    ///
    /// Removing a move that is absent is a no-op.
    pub fn remove(&mut self, square: Move, copies: u32) -> u32 {
        let Some(count) = self.beads.get_mut(&square) else {
            return 0;
        };
        let removed = copies.min(*count);
        *count -= removed;
        if *count == 0 {
            self.beads.remove(&square);
        }
        removed
    }

    /// Number of beads for `square`.
    pub fn count(&self, square: Move) -> u32 {
        self.beads.get(&square).copied().unwrap_or(0)
    }

    /// Total bead count
    pub fn total(&self) -> u32 {
        self.beads.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    /// (move, count) pairs in ascending move order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, u32)> + '_ {
        self.beads.iter().map(|(&square, &count)| (square, count))
    }

    /// Draw a bead, weighting each move by its count.
    ///
    /// Returns `None` for an empty matchbox.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> Option<Move> {
        let items: Vec<(Move, u32)> = self.iter().collect();
        utils::weighted_sample(rng, &items)
    }

    /// Shannon entropy of the bead distribution
    pub fn entropy(&self) -> f64 {
        utils::entropy_from_weights(self.beads.values().map(|&count| count as f64))
    }

    /// Remove every bead.
    pub fn clear(&mut self) {
        self.beads.clear();
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut matchbox = Matchbox::new();
        matchbox.add(5, 3);
        matchbox.add(5, 1);
        matchbox.add(2, 0);
        assert_eq!(matchbox.count(5), 4);
        assert_eq!(matchbox.count(2), 0);
        assert_eq!(matchbox.total(), 4);
    }

    #[test]
    fn test_remove_saturates_and_drops_empty_moves() {
        let mut matchbox = Matchbox::from_counts([(5, 1), (6, 2)]);
        assert_eq!(matchbox.remove(5, 3), 1);
        assert_eq!(matchbox.count(5), 0);
        assert_eq!(matchbox.iter().collect::<Vec<_>>(), vec![(6, 2)]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut matchbox = Matchbox::new();
        assert_eq!(matchbox.remove(9, 1), 0);
        assert!(matchbox.is_empty());
    }

    #[test]
    fn test_sample_empty_matchbox() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Matchbox::new().sample(&mut rng), None);
    }

    #[test]
    fn test_sample_only_returns_present_moves() {
        let mut rng = StdRng::seed_from_u64(3);
        let matchbox = Matchbox::from_counts([(1, 2), (8, 1)]);
        for _ in 0..100 {
            let square = matchbox.sample(&mut rng).unwrap();
            assert!(square == 1 || square == 8);
        }
    }

    #[test]
    fn test_entropy_single_move() {
        let matchbox = Matchbox::from_counts([(4, 7)]);
        assert!(matchbox.entropy().abs() < 1e-12);
    }
}
