//! Move validation and application on a full `GameState`.
//!
//! `validate_move` rejects a move before anything changes; `apply_move`
//! derives the next position (board edits, castling rights, en-passant
//! target, clocks, side to move) as a new value.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::{CastleSide, Color, Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{all_legal_moves, legal_moves};
use crate::move_generation::move_generator::MoveContext;
use crate::move_generation::special_moves::{castle_rook_cols, classify, SpecialKind};

/// Check that `mv` is legal for the side to move and return its special kind.
pub fn validate_move(state: &GameState, mv: Move, rules: RuleSet) -> ChessResult<SpecialKind> {
    let illegal = |reason: &str| ChessErrors::IllegalMove {
        from: mv.from,
        to: mv.to,
        reason: reason.to_owned(),
    };

    let piece = state
        .board
        .piece_at(mv.from)
        .ok_or_else(|| illegal("no piece on the origin square"))?;
    if piece.color != state.active_color {
        return Err(illegal("piece belongs to the side not to move"));
    }

    let ctx = MoveContext::for_state(state, rules);
    if !legal_moves(piece.color, &state.board, mv.from, &ctx)?.contains(mv.to) {
        return Err(illegal("not a legal destination"));
    }

    let kind = classify(&state.board, mv.from, mv.to);
    match (kind, mv.promotion) {
        (SpecialKind::Promotion, Some(choice)) if !choice.is_promotion_target() => {
            Err(illegal("pawns promote to a knight, bishop, rook or queen"))
        }
        (SpecialKind::Promotion, _) | (_, None) => Ok(kind),
        (_, Some(_)) => Err(illegal("promotion piece given for a non-promoting move")),
    }
}

/// Every legal move for the side to move, one entry per promotion choice.
pub fn legal_move_list(state: &GameState, rules: RuleSet) -> ChessResult<Vec<Move>> {
    let ctx = MoveContext::for_state(state, rules);
    let mut moves = Vec::new();

    for (from, destinations) in all_legal_moves(state.active_color, &state.board, &ctx)? {
        for to in destinations {
            if classify(&state.board, from, to) == SpecialKind::Promotion {
                moves.extend(PROMOTION_CHOICES.map(|kind| Move::new(from, to).with_promotion(kind)));
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }

    Ok(moves)
}

const PROMOTION_CHOICES: [PieceKind; 4] =
    [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

/// Next position after `mv`. The move is assumed to be legal.
pub fn apply_move(state: &GameState, mv: Move) -> ChessResult<GameState> {
    let mover = state.board.piece_at(mv.from).ok_or_else(|| ChessErrors::IllegalMove {
        from: mv.from,
        to: mv.to,
        reason: "no piece on the origin square".to_owned(),
    })?;

    let kind = classify(&state.board, mv.from, mv.to);
    let is_capture =
        state.board.piece_at(mv.to).is_some() || kind == SpecialKind::EnPassantCapture;

    let mut next = *state;
    next.board = state.board.with_move(mv.from, mv.to, mv.promotion);

    update_castling_rights(&mut next, mover.color, mover.kind, mv.from, mv.to);

    next.en_passant_target = if mover.kind == PieceKind::Pawn && mv.from.row().abs_diff(mv.to.row()) == 2 {
        mv.from.offset(mover.color.forward(), 0)
    } else {
        None
    };

    if mover.kind == PieceKind::Pawn || is_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover.color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.active_color = mover.color.opposite();
    Ok(next)
}

fn update_castling_rights(state: &mut GameState, color: Color, kind: PieceKind, from: Square, to: Square) {
    if kind == PieceKind::King {
        state.castling_rights.revoke_all(color);
    }

    // A rook leaving its corner, or anything landing on a corner, ends that side.
    for side_color in Color::BOTH {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let (rook_col, _) = castle_rook_cols(side);
            let Some(corner) = Square::from_row_col(side_color.home_row(), rook_col) else {
                continue;
            };
            let rook_left = kind == PieceKind::Rook && side_color == color && from == corner;
            if rook_left || to == corner {
                state.castling_rights.revoke(side_color, side);
            }
        }
    }
}
