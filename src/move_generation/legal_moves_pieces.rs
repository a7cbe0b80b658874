//! Knight, bishop, rook and queen destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square, SquareSet};
use crate::moves::knight_moves::knight_attacks;
use crate::moves::sliding_moves::{bishop_attacks, queen_attacks, rook_attacks};

pub fn generate_knight_moves(color: Color, board: &Board, from: Square) -> SquareSet {
    without_own_pieces(knight_attacks(from), color, board)
}

pub fn generate_slider_moves(color: Color, board: &Board, from: Square, kind: PieceKind) -> SquareSet {
    let occupied = board.occupied();
    let rays = match kind {
        PieceKind::Bishop => bishop_attacks(from, occupied),
        PieceKind::Rook => rook_attacks(from, occupied),
        PieceKind::Queen => queen_attacks(from, occupied),
        _ => SquareSet::EMPTY,
    };
    without_own_pieces(rays, color, board)
}

#[inline]
pub(crate) fn without_own_pieces(targets: SquareSet, color: Color, board: &Board) -> SquareSet {
    SquareSet(targets.0 & !board.occupancy(color).0)
}
