use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, SquareSet};
use crate::moves::pawn_moves::pawn_attacks;

/// Pawn destinations: pushes onto empty squares, the double step from the
/// starting row, diagonal captures, and the en-passant target.
///
/// Destinations on the last row are promotions; `special_moves::classify`
/// reports that from the board, so nothing extra is recorded here.
pub fn generate_pawn_moves(
    color: Color,
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
) -> SquareSet {
    let mut out = SquareSet::EMPTY;

    if let Some(one_step) = from.offset(color.forward(), 0) {
        if board.piece_at(one_step).is_none() {
            out.insert(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(color.forward(), 0) {
                    if board.piece_at(two_step).is_none() {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(color, from) {
        match board.piece_at(target) {
            Some(piece) if piece.color != color => out.insert(target),
            None if en_passant_target == Some(target) && has_enemy_pawn_beside(color, board, from, target) => {
                out.insert(target)
            }
            _ => {}
        }
    }

    out
}

/// The pawn an en-passant capture removes stands on the mover's row, in the
/// target's file.
fn has_enemy_pawn_beside(color: Color, board: &Board, from: Square, target: Square) -> bool {
    Square::from_row_col(from.row(), target.col()).and_then(|square| board.piece_at(square))
        == Some(Piece::new(color.opposite(), PieceKind::Pawn))
}
