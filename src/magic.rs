//! Magic-square encoding of the tic-tac-toe board
//!
//! Squares are numbered so that every row, column and diagonal of the
//! 3x3 board sums to 15:
//!
//! ```text
//! | 2 | 7 | 6 |
//! | 9 | 5 | 1 |
//! | 4 | 3 | 8 |
//! ```
//!
//! Claiming a line is therefore the same as holding three squares that sum
//! to 15, which turns win detection into a subset-sum check.

use crate::types::Move;

/// Sum shared by every winning line.
pub const LINE_SUM: u8 = 15;

/// Magic squares laid out by grid cell (row-major, cell 0 is top-left).
pub const MAGIC_SQUARE: [Move; 9] = [2, 7, 6, 9, 5, 1, 4, 3, 8];

/// The eight triples summing to 15, one per board line.
pub const WINNING_TRIPLES: [[Move; 3]; 8] = [
    [2, 7, 6],
    [9, 5, 1],
    [4, 3, 8], // rows
    [2, 9, 4],
    [7, 5, 3],
    [6, 1, 8], // columns
    [2, 5, 8],
    [6, 5, 4], // diagonals
];

/// Check whether some 3-element subset of `moves` sums to 15.
///
/// Fewer than three moves can never win.
pub fn has_winning_triple(moves: &[Move]) -> bool {
    let n = moves.len();
    if n < 3 {
        return false;
    }
    for i in 0..n - 2 {
        for j in i + 1..n - 1 {
            for k in j + 1..n {
                if moves[i] as u16 + moves[j] as u16 + moves[k] as u16 == LINE_SUM as u16 {
                    return true;
                }
            }
        }
    }
    false
}

/// Magic square at grid cell `position` (0-8).
pub fn square_at(position: usize) -> Option<Move> {
    MAGIC_SQUARE.get(position).copied()
}

/// Grid cell (0-8) holding magic square `square`.
pub fn position_of(square: Move) -> Option<usize> {
    MAGIC_SQUARE.iter().position(|&s| s == square)
}

/// Check whether `square` is a valid magic-square move.
pub fn is_square(square: Move) -> bool {
    (1..=9).contains(&square)
}
