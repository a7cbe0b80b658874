//! Immutable 8×8 piece placement.
//!
//! `Board` is a mailbox of 64 optional pieces. Every transformation returns
//! a new value; nothing here checks legality.

use std::fmt;

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, SquareSet};
use crate::move_generation::special_moves::{auxiliary_edits, classify};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Builder-style placement used by parsers and fixtures.
    #[inline]
    pub fn set(&mut self, square: Square, occupant: Option<Piece>) {
        self.squares[square.index() as usize] = occupant;
    }

    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    /// Board after moving the piece on `from` to `to`.
    ///
    /// Castling also relocates the rook, en-passant clears the captured pawn,
    /// and promotion replaces the pawn with `promotion` (queen when `None`).
    /// The special kind is derived from this board, never from stored state.
    pub fn with_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Board {
        let kind = classify(self, from, to);
        let mut next = *self;

        let moving = next.squares[from.index() as usize].take();
        next.set(to, moving);

        for (square, occupant) in auxiliary_edits(self, kind, from, to, promotion) {
            next.set(square, occupant);
        }

        next
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|square| self.piece_at(*square) == Some(king))
    }

    pub fn occupancy(&self, color: Color) -> SquareSet {
        self.pieces(color).map(|(square, _)| square).collect()
    }

    pub fn occupied(&self) -> SquareSet {
        Square::all()
            .filter(|square| self.piece_at(*square).is_some())
            .collect()
    }

    /// Squares and pieces of one colour in ascending square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.piece_at(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }
}

/// Rank 8 first, `.` for empty squares, FEN letters for pieces.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            let mut line = String::with_capacity(8);
            for col in 0..8u8 {
                let piece = Square::from_row_col(row, col).and_then(|sq| self.piece_at(sq));
                line.push(piece.map_or('.', Piece::fen_char));
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("square should parse")
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let board = parse_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1")
            .expect("FEN should parse")
            .board;
        let next = board.with_move(sq("e2"), sq("e4"), None);

        assert_eq!(board.piece_at(sq("e2")), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(next.piece_at(sq("e2")), None);
        assert_eq!(next.piece_at(sq("e4")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    }

    #[test]
    fn castling_relocates_rook() {
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse")
            .board;

        let kingside = board.with_move(sq("e1"), sq("g1"), None);
        assert_eq!(kingside.piece_at(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(kingside.piece_at(sq("h1")), None);

        let queenside = board.with_move(sq("e8"), sq("c8"), None);
        assert_eq!(queenside.piece_at(sq("d8")), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(queenside.piece_at(sq("a8")), None);
        assert_eq!(queenside.piece_at(sq("c8")), Some(Piece::new(Color::Black, PieceKind::King)));
    }

    #[test]
    fn en_passant_clears_captured_pawn() {
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse")
            .board;
        let next = board.with_move(sq("e5"), sq("d6"), None);

        assert_eq!(next.piece_at(sq("d5")), None);
        assert_eq!(next.piece_at(sq("d6")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let board = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse")
            .board;

        let queen = board.with_move(sq("a7"), sq("a8"), None);
        assert_eq!(queen.piece_at(sq("a8")), Some(Piece::new(Color::White, PieceKind::Queen)));

        let knight = board.with_move(sq("a7"), sq("a8"), Some(PieceKind::Knight));
        assert_eq!(knight.piece_at(sq("a8")), Some(Piece::new(Color::White, PieceKind::Knight)));
    }

    #[test]
    fn king_lookup_and_occupancy() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::new(Color::White, PieceKind::King))
            .with_piece(sq("e8"), Piece::new(Color::Black, PieceKind::King));

        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(board.occupancy(Color::White).len(), 1);
        assert_eq!(board.occupied().len(), 2);
    }
}
