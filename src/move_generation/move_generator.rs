//! Pseudo-legal move generation.
//!
//! Destinations obey piece movement shape and occupancy but may leave the
//! mover's own king attacked; `legal_move_checks` filters those out.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, Square, SquareSet};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::{generate_knight_moves, generate_slider_moves};

/// Position metadata that move generation needs besides the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveContext {
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
    pub rules: RuleSet,
}

impl MoveContext {
    /// Positional castling with the given en-passant target.
    pub const fn positional(en_passant_target: Option<Square>) -> Self {
        Self {
            en_passant_target,
            castling_rights: CastlingRights::ALL,
            rules: RuleSet::POSITIONAL,
        }
    }

    pub const fn for_state(state: &GameState, rules: RuleSet) -> Self {
        Self {
            en_passant_target: state.en_passant_target,
            castling_rights: state.castling_rights,
            rules,
        }
    }

    /// Context for computing the opponent's attacks: no en-passant target and
    /// no castling, neither of which can land on an occupied square.
    pub(crate) const fn attacks_only() -> Self {
        Self {
            en_passant_target: None,
            castling_rights: CastlingRights::NONE,
            rules: RuleSet::POSITIONAL,
        }
    }
}

/// Destinations of the `color` piece standing on `square`.
///
/// Empty when the square is empty or holds a piece of the other colour.
pub fn pseudo_legal_moves(
    color: Color,
    board: &Board,
    square: Square,
    ctx: &MoveContext,
) -> SquareSet {
    let Some(piece) = board.piece_at(square) else {
        return SquareSet::EMPTY;
    };
    if piece.color != color {
        return SquareSet::EMPTY;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(color, board, square, ctx.en_passant_target),
        PieceKind::Knight => generate_knight_moves(color, board, square),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_moves(color, board, square, piece.kind)
        }
        PieceKind::King => {
            generate_king_moves(color, board, square) | generate_castling_moves(color, board, square, ctx)
        }
    }
}

/// Union of every pseudo-legal destination for `color`.
pub fn all_pseudo_legal_moves(color: Color, board: &Board, ctx: &MoveContext) -> SquareSet {
    board
        .pieces(color)
        .fold(SquareSet::EMPTY, |acc, (square, _)| {
            acc | pseudo_legal_moves(color, board, square, ctx)
        })
}

/// Squares `color` could move onto, castling excluded.
pub fn attacked_squares(color: Color, board: &Board) -> SquareSet {
    all_pseudo_legal_moves(color, board, &MoveContext::attacks_only())
}
