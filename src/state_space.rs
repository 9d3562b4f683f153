//! The learned table of board histories and their matchboxes.
//!
//! The state space holds every board history player 1 can face before each
//! of its (at most five) moves: for depth `i` in `0..=4`, every ordered
//! arrangement of `2i` distinct squares in which neither player has already
//! completed a line. Each history owns a [`Matchbox`] of candidate moves that
//! starts empty and is filled by reinforcement.
//!
//! The key set is fixed at construction. Two histories that reach the same
//! squares in a different order are distinct keys and learn independently.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    analyzer::has_any_win,
    matchbox::Matchbox,
    types::{BoardState, MAX_DEPTH, Move},
};

/// Board histories by player-1 depth, each mapped to its matchbox.
#[derive(Clone)]
pub struct StateSpace {
    depths: Vec<HashMap<BoardState, Matchbox>>,
}

impl StateSpace {
    /// Enumerate every win-free history for depths 0 through 4.
    ///
    /// Depth `i + 1` is built by extending each depth-`i` history with one
    /// move per player. A line completed in a prefix stays completed in every
    /// extension, so this yields exactly the win-free permutations of length
    /// `2(i + 1)`.
    pub fn new() -> Self {
        let mut depths = Vec::with_capacity(MAX_DEPTH + 1);
        let mut frontier = vec![BoardState::empty()];

        for depth in 0..=MAX_DEPTH {
            if depth > 0 {
                frontier = extend_by_one_round(&frontier);
            }
            log::debug!("depth {depth}: {} board states", frontier.len());
            depths.push(
                frontier
                    .iter()
                    .map(|&state| (state, Matchbox::new()))
                    .collect(),
            );
        }

        let space = Self { depths };
        log::info!("enumerated {} board states", space.len());
        space
    }

    /// Matchbox for `state`, if it is a key of the table.
    pub fn matchbox(&self, state: &BoardState) -> Option<&Matchbox> {
        self.table_for(state)?.get(state)
    }

    /// Mutable matchbox for `state`, if it is a key of the table.
    pub fn matchbox_mut(&mut self, state: &BoardState) -> Option<&mut Matchbox> {
        if state.len() % 2 != 0 {
            return None;
        }
        self.depths.get_mut(state.depth())?.get_mut(state)
    }

    /// Like [`Self::matchbox_mut`], but a missing key is an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownBoardState`] if `state` is not a key.
    pub fn require_mut(&mut self, state: &BoardState) -> crate::Result<&mut Matchbox> {
        self.matchbox_mut(state)
            .ok_or_else(|| crate::Error::UnknownBoardState {
                state: state.to_string(),
            })
    }

    pub fn contains(&self, state: &BoardState) -> bool {
        self.matchbox(state).is_some()
    }

    /// Total number of board states across all depths.
    pub fn len(&self) -> usize {
        self.depths.iter().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of board states at `depth` (zero beyond depth 4).
    pub fn len_at_depth(&self, depth: usize) -> usize {
        self.depths.get(depth).map_or(0, HashMap::len)
    }

    /// Board states and matchboxes at `depth`, in no particular order.
    pub fn depth(&self, depth: usize) -> impl Iterator<Item = (&BoardState, &Matchbox)> {
        self.depths.get(depth).into_iter().flat_map(|table| table.iter())
    }

    /// All board states and matchboxes, shallowest depth first.
    pub fn iter(&self) -> impl Iterator<Item = (&BoardState, &Matchbox)> {
        self.depths.iter().flat_map(|table| table.iter())
    }

    /// Board states whose matchbox holds at least one bead.
    pub fn learned(&self) -> impl Iterator<Item = (&BoardState, &Matchbox)> {
        self.iter().filter(|(_, matchbox)| !matchbox.is_empty())
    }

    /// Number of learned board states at `depth`.
    pub fn learned_at_depth(&self, depth: usize) -> usize {
        self.depth(depth)
            .filter(|(_, matchbox)| !matchbox.is_empty())
            .count()
    }

    /// Beads across every matchbox.
    pub fn total_beads(&self) -> u64 {
        self.iter()
            .map(|(_, matchbox)| u64::from(matchbox.total()))
            .sum()
    }

    /// Empty every matchbox; the key set is unchanged.
    pub fn reset(&mut self) {
        for table in &mut self.depths {
            table.values_mut().for_each(Matchbox::clear);
        }
    }

    /// Capture the learned matchboxes in a deterministic order.
    pub fn snapshot(&self) -> TableSnapshot {
        let mut entries: Vec<SnapshotEntry> = self
            .learned()
            .map(|(state, matchbox)| SnapshotEntry {
                state: *state,
                beads: matchbox.iter().collect(),
            })
            .collect();
        entries.sort_by(|a, b| a.state.cmp(&b.state));
        TableSnapshot { entries }
    }

    /// Rebuild the full table and restore the learned matchboxes of `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownBoardState`] if the snapshot names a
    /// history the enumeration does not contain, and
    /// [`crate::Error::InvalidMoveList`] if a bead is not a legal reply.
    pub fn from_snapshot(snapshot: &TableSnapshot) -> crate::Result<Self> {
        let mut space = Self::new();
        for entry in &snapshot.entries {
            if let Some(&(square, _)) = entry
                .beads
                .iter()
                .find(|&&(square, _)| entry.state.with_move(square).is_err())
            {
                return Err(crate::Error::invalid_moves(format!(
                    "bead {square} is not a legal move after {}",
                    entry.state
                )));
            }
            *space.require_mut(&entry.state)? = Matchbox::from_counts(entry.beads.iter().copied());
        }
        log::info!(
            "restored {} learned board states from snapshot",
            snapshot.entries.len()
        );
        Ok(space)
    }

    fn table_for(&self, state: &BoardState) -> Option<&HashMap<BoardState, Matchbox>> {
        if state.len() % 2 != 0 {
            return None;
        }
        self.depths.get(state.depth())
    }
}

impl Default for StateSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<usize> = self.depths.iter().map(HashMap::len).collect();
        f.debug_struct("StateSpace")
            .field("states_per_depth", &sizes)
            .field("learned", &self.learned().count())
            .finish()
    }
}

fn extend_by_one_round(frontier: &[BoardState]) -> Vec<BoardState> {
    let mut next = Vec::new();
    for state in frontier {
        for first in state.free_squares() {
            let after_first = state.push_unchecked(first);
            for second in after_first.free_squares() {
                let candidate = after_first.push_unchecked(second);
                if !has_any_win(candidate.as_slice()) {
                    next.push(candidate);
                }
            }
        }
    }
    next
}

/// A learned matchbox as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub state: BoardState,
    pub beads: Vec<(Move, u32)>,
}

/// The learned part of a [`StateSpace`]; empty matchboxes are implied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub entries: Vec<SnapshotEntry>,
}
