//! Ray casting for bishops, rooks and queens.
//!
//! A ray runs from the piece toward the board edge and includes the first
//! occupied square it meets, whoever owns it. Callers remove their own
//! pieces from the result.

use crate::game_state::chess_types::{Square, SquareSet};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    rays(square, &BISHOP_DIRECTIONS, occupancy)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    rays(square, &ROOK_DIRECTIONS, occupancy)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

fn rays(square: Square, directions: &[(i8, i8)], occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    for &(d_row, d_col) in directions {
        attacks |= trace_ray(square, d_row, d_col, occupancy);
    }
    attacks
}

fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    let mut current = square.offset(d_row, d_col);

    while let Some(target) = current {
        attacks.insert(target);
        if occupancy.contains(target) {
            break;
        }
        current = target.offset(d_row, d_col);
    }

    attacks
}
