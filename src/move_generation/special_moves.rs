//! Castling, en-passant and promotion classification.
//!
//! The kind of a move is always recomputed from `(board, from, to)`; it is
//! never cached between generation and application.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_KING_TARGET_COL, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL, KING_START_COL,
    QUEENSIDE_KING_TARGET_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL,
};
use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    #[default]
    None,
    CastleKingside,
    CastleQueenside,
    EnPassantCapture,
    Promotion,
}

impl SpecialKind {
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            SpecialKind::CastleKingside => Some(CastleSide::Kingside),
            SpecialKind::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

pub fn classify(board: &Board, from: Square, to: Square) -> SpecialKind {
    let Some(piece) = board.piece_at(from) else {
        return SpecialKind::None;
    };

    match piece.kind {
        PieceKind::King => {
            let on_home_square =
                from.row() == piece.color.home_row() && from.col() == KING_START_COL;
            if !on_home_square || to.row() != from.row() {
                return SpecialKind::None;
            }
            match to.col() {
                KINGSIDE_KING_TARGET_COL => SpecialKind::CastleKingside,
                QUEENSIDE_KING_TARGET_COL => SpecialKind::CastleQueenside,
                _ => SpecialKind::None,
            }
        }
        PieceKind::Pawn => {
            if to.row() == piece.color.promotion_row() {
                SpecialKind::Promotion
            } else if to.col() != from.col() && board.piece_at(to).is_none() {
                SpecialKind::EnPassantCapture
            } else {
                SpecialKind::None
            }
        }
        _ => SpecialKind::None,
    }
}

/// Rook origin and destination columns for a castle.
pub const fn castle_rook_cols(side: CastleSide) -> (u8, u8) {
    match side {
        CastleSide::Kingside => (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL),
        CastleSide::Queenside => (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL),
    }
}

/// Extra square writes a move of `kind` needs beyond relocating the mover.
///
/// `board` is the position before the move.
pub fn auxiliary_edits(
    board: &Board,
    kind: SpecialKind,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Vec<(Square, Option<Piece>)> {
    let Some(mover) = board.piece_at(from) else {
        return Vec::new();
    };

    match kind {
        SpecialKind::None => Vec::new(),
        SpecialKind::CastleKingside | SpecialKind::CastleQueenside => {
            let Some(side) = kind.castle_side() else {
                return Vec::new();
            };
            let (rook_col, rook_target_col) = castle_rook_cols(side);
            let (Some(rook_from), Some(rook_to)) = (
                Square::from_row_col(from.row(), rook_col),
                Square::from_row_col(from.row(), rook_target_col),
            ) else {
                return Vec::new();
            };

            let rook = Piece::new(mover.color, PieceKind::Rook);
            if board.piece_at(rook_from) != Some(rook) {
                return Vec::new();
            }
            vec![(rook_from, None), (rook_to, Some(rook))]
        }
        SpecialKind::EnPassantCapture => Square::from_row_col(from.row(), to.col())
            .map(|captured| vec![(captured, None)])
            .unwrap_or_default(),
        SpecialKind::Promotion => {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            vec![(to, Some(Piece::new(mover.color, kind)))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{auxiliary_edits, classify, SpecialKind};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("square should parse")
    }

    #[test]
    fn classifies_castles_for_both_colours() {
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse")
            .board;

        assert_eq!(classify(&board, sq("e1"), sq("g1")), SpecialKind::CastleKingside);
        assert_eq!(classify(&board, sq("e1"), sq("c1")), SpecialKind::CastleQueenside);
        assert_eq!(classify(&board, sq("e8"), sq("g8")), SpecialKind::CastleKingside);
        assert_eq!(classify(&board, sq("e8"), sq("c8")), SpecialKind::CastleQueenside);
        assert_eq!(classify(&board, sq("e1"), sq("f1")), SpecialKind::None);
    }

    #[test]
    fn classifies_pawn_specials() {
        let board = parse_fen("r3k3/1P6/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse")
            .board;

        assert_eq!(classify(&board, sq("e5"), sq("d6")), SpecialKind::EnPassantCapture);
        assert_eq!(classify(&board, sq("e5"), sq("e6")), SpecialKind::None);
        assert_eq!(classify(&board, sq("b7"), sq("b8")), SpecialKind::Promotion);
        assert_eq!(classify(&board, sq("b7"), sq("a8")), SpecialKind::Promotion);
    }

    #[test]
    fn classification_is_recomputed_per_call() {
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse")
            .board;

        // Interleaving unrelated queries must not change the answer.
        let first = classify(&board, sq("e5"), sq("d6"));
        let _ = classify(&board, sq("e1"), sq("g1"));
        assert_eq!(classify(&board, sq("e5"), sq("d6")), first);
    }

    #[test]
    fn en_passant_edit_targets_origin_rank() {
        let board = parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1")
            .expect("FEN should parse")
            .board;
        let edits = auxiliary_edits(&board, SpecialKind::EnPassantCapture, sq("e4"), sq("d3"), None);
        assert_eq!(edits, vec![(sq("d4"), None)]);
    }

    #[test]
    fn black_promotion_uses_chosen_piece() {
        let board = parse_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1")
            .expect("FEN should parse")
            .board;
        let edits = auxiliary_edits(
            &board,
            SpecialKind::Promotion,
            sq("a2"),
            sq("a1"),
            Some(PieceKind::Rook),
        );
        assert_eq!(edits, vec![(sq("a1"), Some(Piece::new(Color::Black, PieceKind::Rook)))]);
    }
}
