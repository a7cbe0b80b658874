//! Randomized piece placement.
//!
//! Each square independently holds a uniformly chosen piece with
//! probability `piece_chance` percent. Nothing guarantees kings or a legal
//! position; callers find out from the check detector.

use rand::Rng;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub const DEFAULT_PIECE_CHANCE: u8 = 50;

pub fn random_board<R: Rng + ?Sized>(rng: &mut R, piece_chance: u8) -> ChessResult<Board> {
    if piece_chance > 100 {
        return Err(ChessErrors::InvalidConfig(format!(
            "piece chance must be a percentage, got {piece_chance}"
        )));
    }

    let mut board = Board::empty();
    for square in Square::all() {
        if rng.random_range(1..=100u8) > piece_chance {
            continue;
        }
        let color = if rng.random_bool(0.5) { Color::White } else { Color::Black };
        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        board.set(square, Some(Piece::new(color, kind)));
    }
    Ok(board)
}
