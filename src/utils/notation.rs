//! Short algebraic rendering of a single move.
//!
//! The text is derived from the board before the move plus the status of
//! the position after it. Pieces are never disambiguated by origin square.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind};
use crate::move_generation::legal_move_checks::PositionStatus;
use crate::move_generation::special_moves::{classify, SpecialKind};

pub fn format_move(before: &Board, mv: Move, after_status: PositionStatus) -> ChessResult<String> {
    let mover = before.piece_at(mv.from).ok_or_else(|| ChessErrors::IllegalMove {
        from: mv.from,
        to: mv.to,
        reason: "no piece on the origin square".to_owned(),
    })?;

    let kind = classify(before, mv.from, mv.to);
    let is_capture = before.piece_at(mv.to).is_some() || kind == SpecialKind::EnPassantCapture;

    let mut out = String::new();
    match kind {
        SpecialKind::CastleKingside => out.push_str("O-O"),
        SpecialKind::CastleQueenside => out.push_str("O-O-O"),
        _ => {
            if mover.kind == PieceKind::Pawn {
                if is_capture {
                    out.push(mv.from.file_char());
                }
            } else {
                out.push(mover.kind.letter().to_ascii_uppercase());
            }
            if is_capture {
                out.push('x');
            }
            out.push_str(&mv.to.to_algebraic());

            match kind {
                SpecialKind::Promotion => {
                    let choice = mv.promotion.unwrap_or(PieceKind::Queen);
                    out.push('=');
                    out.push(choice.letter().to_ascii_uppercase());
                }
                SpecialKind::EnPassantCapture => out.push_str("e.p."),
                _ => {}
            }
        }
    }

    out.push_str(status_suffix(after_status));
    Ok(out)
}

fn status_suffix(status: PositionStatus) -> &'static str {
    match status {
        PositionStatus::Checkmate => "#",
        PositionStatus::Stalemate => " stalemate",
        PositionStatus::Check => "+",
        PositionStatus::Ongoing => "",
    }
}

/// Numbered movetext, e.g. `1. e4 e5 2. Nf3`.
///
/// `first_mover_is_black` starts the numbering with `1...` when the game
/// began from a Black-to-move position.
pub fn format_movetext<'a>(
    notations: impl IntoIterator<Item = &'a str>,
    first_move_number: u32,
    first_mover_is_black: bool,
) -> String {
    let mut parts = Vec::new();
    let mut number = first_move_number;
    let mut black_to_move = first_mover_is_black;

    for (ply, text) in notations.into_iter().enumerate() {
        if !black_to_move {
            parts.push(format!("{number}. {text}"));
        } else if ply == 0 {
            parts.push(format!("{number}... {text}"));
        } else {
            parts.push(text.to_owned());
        }

        if black_to_move {
            number += 1;
        }
        black_to_move = !black_to_move;
    }

    parts.join(" ")
}
