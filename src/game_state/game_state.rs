//! Position snapshot: the board plus the FEN metadata that travels with it.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_START_COL, STARTING_POSITION_FEN};
use crate::game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind, Square};
use crate::move_generation::special_moves::castle_rook_cols;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub active_color: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    /// Plies since the last capture or pawn move.
    pub halfmove_clock: u32,
    /// Starts at 1 and increments after each black move.
    pub fullmove_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_board(Board::empty(), Color::White)
    }
}

impl GameState {
    /// Position with default metadata around an arbitrary board.
    ///
    /// Castling rights are inferred from kings and rooks standing on their
    /// original squares, which is what a freshly set-up board implies.
    pub fn from_board(board: Board, active_color: Color) -> Self {
        Self {
            board,
            active_color,
            castling_rights: infer_castling_rights(&board),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn new_game() -> ChessResult<Self> {
        parse_fen(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }
}

fn infer_castling_rights(board: &Board) -> CastlingRights {
    let mut rights = CastlingRights::NONE;
    for color in Color::BOTH {
        let row = color.home_row();
        let king_home = Square::from_row_col(row, KING_START_COL).and_then(|sq| board.piece_at(sq));
        if king_home != Some(Piece::new(color, PieceKind::King)) {
            continue;
        }
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let (rook_col, _) = castle_rook_cols(side);
            let rook_home = Square::from_row_col(row, rook_col).and_then(|sq| board.piece_at(sq));
            if rook_home == Some(Piece::new(color, PieceKind::Rook)) {
                rights.grant(color, side);
            }
        }
    }
    rights
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color};

    #[test]
    fn new_game_matches_starting_fen() {
        let state = GameState::new_game().expect("starting FEN should parse");
        assert_eq!(state.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(state.active_color, Color::White);
        assert_eq!(state.castling_rights, CastlingRights::ALL);
    }

    #[test]
    fn from_board_infers_castling_rights() {
        let parsed = GameState::from_fen("r3k3/8/8/8/8/8/8/4K2R w - - 0 1").expect("FEN should parse");
        let rebuilt = GameState::from_board(parsed.board, Color::White);
        assert_eq!(rebuilt.get_fen(), "r3k3/8/8/8/8/8/8/4K2R w Kq - 0 1");
    }
}
