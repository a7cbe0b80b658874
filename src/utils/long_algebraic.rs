//! Coordinate move text: `e2-e4`, `e2e4`, `e7-e8q`, `e7e8=Q`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Move, PieceKind, Square};

pub fn parse_long_algebraic(text: &str) -> ChessResult<Move> {
    let compact: String = text
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | '='))
        .collect();

    if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
        return Err(ChessErrors::FormatError(format!("invalid move text: {text:?}")));
    }

    let from = Square::from_algebraic(&compact[0..2])?;
    let to = Square::from_algebraic(&compact[2..4])?;
    let mv = Move::new(from, to);

    match compact[4..].chars().next() {
        None => Ok(mv),
        Some(letter) => {
            let kind = PieceKind::from_letter(letter)
                .filter(|kind| kind.is_promotion_target())
                .ok_or_else(|| ChessErrors::FormatError(format!("invalid promotion piece in {text:?}")))?;
            Ok(mv.with_promotion(kind))
        }
    }
}

/// UCI-style text without separator, e.g. `e7e8q`.
pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = format!("{}{}", mv.from, mv.to);
    if let Some(kind) = mv.promotion {
        out.push(kind.letter());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dashed_and_compact_forms() {
        let dashed = parse_long_algebraic("e2-e4").expect("dashed form should parse");
        let compact = parse_long_algebraic(" e2e4 ").expect("compact form should parse");
        assert_eq!(dashed, compact);
        assert_eq!(dashed.to_string(), "e2-e4");
        assert_eq!(move_to_long_algebraic(dashed), "e2e4");
    }

    #[test]
    fn reads_promotion_suffix() {
        let mv = parse_long_algebraic("e7-e8=N").expect("promotion should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        assert_eq!(move_to_long_algebraic(mv), "e7e8n");
        assert_eq!(parse_long_algebraic("e7e8q").expect("parse").promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(parse_long_algebraic("e2"), Err(ChessErrors::FormatError(_))));
        assert!(matches!(parse_long_algebraic("e7e8k"), Err(ChessErrors::FormatError(_))));
        assert!(matches!(parse_long_algebraic("z2e4"), Err(ChessErrors::InvalidSquare(_))));
        assert!(parse_long_algebraic("é2e4").is_err());
    }
}
