//! Check detection and legal-move filtering.
//!
//! A candidate move is legal when simulating it with `Board::with_move`
//! leaves the mover's king outside the opponent's pseudo-legal destination
//! set. Each simulation copies the board; no attack state is cached.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square, SquareSet};
use crate::move_generation::move_generator::{attacked_squares, pseudo_legal_moves, MoveContext};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{bishop_attacks, rook_attacks};

/// Terminal classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl PositionStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, PositionStatus::Checkmate | PositionStatus::Stalemate)
    }
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> ChessResult<Square> {
    board.king_square(color).ok_or(ChessErrors::MissingKing(color))
}

/// Whether `color`'s king stands on a square the opponent can move to.
pub fn is_king_in_check(color: Color, board: &Board) -> ChessResult<bool> {
    let king = king_square(board, color)?;
    Ok(attacked_squares(color.opposite(), board).contains(king))
}

/// Whether any `attacker` piece attacks `square`, occupied or not.
///
/// Pawns count their diagonals only, so an empty square in front of a pawn
/// is not attacked by it.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let occupied = board.occupied();

    for (from, piece) in board.pieces(attacker) {
        let reach = match piece.kind {
            PieceKind::Pawn => pawn_attacks(attacker, from),
            PieceKind::Knight => knight_attacks(from),
            PieceKind::Bishop => bishop_attacks(from, occupied),
            PieceKind::Rook => rook_attacks(from, occupied),
            PieceKind::Queen => bishop_attacks(from, occupied) | rook_attacks(from, occupied),
            PieceKind::King => king_attacks(from),
        };
        if reach.contains(square) {
            return true;
        }
    }

    false
}

/// Legal destinations of the `color` piece on `square`.
pub fn legal_moves(
    color: Color,
    board: &Board,
    square: Square,
    ctx: &MoveContext,
) -> ChessResult<SquareSet> {
    let mut legal = SquareSet::EMPTY;

    for candidate in pseudo_legal_moves(color, board, square, ctx) {
        let next = board.with_move(square, candidate, None);
        if !is_king_in_check(color, &next)? {
            legal.insert(candidate);
        }
    }

    Ok(legal)
}

/// Legal destinations for every `color` piece that has at least one.
pub fn all_legal_moves(
    color: Color,
    board: &Board,
    ctx: &MoveContext,
) -> ChessResult<Vec<(Square, SquareSet)>> {
    let mut out = Vec::new();
    for (square, _) in board.pieces(color) {
        let moves = legal_moves(color, board, square, ctx)?;
        if !moves.is_empty() {
            out.push((square, moves));
        }
    }
    Ok(out)
}

/// True when `color` has no legal move at all.
pub fn is_game_over(color: Color, board: &Board, ctx: &MoveContext) -> ChessResult<bool> {
    // The king must exist even if some other piece has moves.
    king_square(board, color)?;

    for (square, _) in board.pieces(color) {
        if !legal_moves(color, board, square, ctx)?.is_empty() {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn classify_position(color: Color, board: &Board, ctx: &MoveContext) -> ChessResult<PositionStatus> {
    let in_check = is_king_in_check(color, board)?;
    let game_over = is_game_over(color, board, ctx)?;

    Ok(match (game_over, in_check) {
        (true, true) => PositionStatus::Checkmate,
        (true, false) => PositionStatus::Stalemate,
        (false, true) => PositionStatus::Check,
        (false, false) => PositionStatus::Ongoing,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        all_legal_moves, classify_position, is_game_over, is_king_in_check, is_square_attacked,
        legal_moves, PositionStatus,
    };
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::{RuleSet, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::move_generation::move_generator::MoveContext;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("square should parse")
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let state = parse_fen(STARTING_POSITION_FEN).expect("FEN should parse");
        let ctx = MoveContext::positional(state.en_passant_target);
        let total: usize = all_legal_moves(Color::White, &state.board, &ctx)
            .expect("generation should succeed")
            .iter()
            .map(|(_, moves)| moves.len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn generated_squares_stay_on_board() {
        let state = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let ctx = MoveContext::for_state(&state, RuleSet::STANDARD);
        for color in Color::BOTH {
            for (from, moves) in all_legal_moves(color, &state.board, &ctx).expect("generation should succeed") {
                assert!(from.row() < 8 && from.col() < 8);
                for to in moves {
                    assert!(to.row() < 8 && to.col() < 8);
                    assert!(to.index() < 64);
                }
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let state = parse_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let ctx = MoveContext::positional(None);
        let moves = legal_moves(Color::White, &state.board, sq("e2"), &ctx).expect("should succeed");
        assert!(moves.is_empty());
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let state = parse_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1").expect("FEN should parse");
        let ctx = MoveContext::positional(None);
        let moves = legal_moves(Color::White, &state.board, sq("e1"), &ctx).expect("should succeed");
        let names: Vec<String> = moves.iter().map(|s| s.to_algebraic()).collect();
        assert_eq!(names, vec!["d1", "f1"]);
    }

    #[test]
    fn stalemate_fixture_is_game_over_without_check() {
        let state = parse_fen("8/8/8/8/8/6q1/5k2/7K w - - 0 1").expect("FEN should parse");
        let ctx = MoveContext::positional(None);

        assert!(is_game_over(Color::White, &state.board, &ctx).expect("should succeed"));
        assert!(!is_king_in_check(Color::White, &state.board).expect("should succeed"));
        assert_eq!(
            classify_position(Color::White, &state.board, &ctx).expect("should succeed"),
            PositionStatus::Stalemate
        );
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let state = parse_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let ctx = MoveContext::positional(None);
        assert_eq!(
            classify_position(Color::Black, &state.board, &ctx).expect("should succeed"),
            PositionStatus::Checkmate
        );
    }

    #[test]
    fn missing_king_is_an_error() {
        let board = Board::empty().with_piece(sq("e1"), Piece::new(Color::White, PieceKind::King));
        assert_eq!(
            is_king_in_check(Color::Black, &board),
            Err(ChessErrors::MissingKing(Color::Black))
        );
        let ctx = MoveContext::positional(None);
        assert!(is_game_over(Color::Black, &board, &ctx).is_err());
    }

    #[test]
    fn pawn_push_square_is_not_attacked() {
        let state = parse_fen("4k3/4p3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_square_attacked(&state.board, sq("e6"), Color::Black));
        assert!(is_square_attacked(&state.board, sq("d6"), Color::Black));
    }

    #[test]
    fn en_passant_that_exposes_king_is_rejected() {
        // Capturing on d6 would open the fifth rank to the rook on a5.
        let state = parse_fen("4k3/8/8/r2pP2K/8/8/8/8 w - d6 0 1").expect("FEN should parse");
        let ctx = MoveContext::positional(state.en_passant_target);
        let moves = legal_moves(Color::White, &state.board, sq("e5"), &ctx).expect("should succeed");
        assert!(!moves.contains(sq("d6")));
        assert!(moves.contains(sq("e6")));
    }
}
