use crate::game_state::board::Board;
use crate::game_state::chess_rules::{CastlingPolicy, KING_START_COL};
use crate::game_state::chess_types::{CastleSide, Color, Piece, PieceKind, Square, SquareSet};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_pieces::without_own_pieces;
use crate::move_generation::move_generator::MoveContext;
use crate::move_generation::special_moves::castle_rook_cols;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(color: Color, board: &Board, from: Square) -> SquareSet {
    without_own_pieces(king_attacks(from), color, board)
}

/// Castling destinations for a king standing on `from`.
///
/// Under `CastlingPolicy::Positional` a side is offered when the king is on
/// its original square, the matching rook is on its original square, and
/// every square between them is empty. `CastlingPolicy::Standard` further
/// requires the FEN right, a king not in check, and an unattacked path.
pub fn generate_castling_moves(color: Color, board: &Board, from: Square, ctx: &MoveContext) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let home_row = color.home_row();
    if from.row() != home_row || from.col() != KING_START_COL {
        return out;
    }

    let standard = ctx.rules.castling == CastlingPolicy::Standard;
    let enemy = color.opposite();
    if standard && is_square_attacked(board, from, enemy) {
        return out;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if standard && !ctx.castling_rights.has(color, side) {
            continue;
        }

        let (rook_col, _) = castle_rook_cols(side);
        let rook_square = Square::from_row_col(home_row, rook_col);
        if rook_square.and_then(|sq| board.piece_at(sq)) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }

        let (low, high) = if rook_col > KING_START_COL {
            (KING_START_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_START_COL)
        };
        let path_clear = (low..high)
            .filter_map(|col| Square::from_row_col(home_row, col))
            .all(|sq| board.piece_at(sq).is_none());
        if !path_clear {
            continue;
        }

        let step: i8 = if rook_col > KING_START_COL { 1 } else { -1 };
        let (Some(crossed), Some(target)) = (from.offset(0, step), from.offset(0, 2 * step)) else {
            continue;
        };
        if standard && (is_square_attacked(board, crossed, enemy) || is_square_attacked(board, target, enemy)) {
            continue;
        }

        out.insert(target);
    }

    out
}
