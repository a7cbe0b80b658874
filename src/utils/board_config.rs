//! Square-to-piece-code board mapping, e.g. `{"e1": "wk", "e8": "bk"}`.
//!
//! Squares missing from the mapping are empty. Keys must be algebraic
//! squares and values two-character piece codes; anything else is rejected.

use std::collections::BTreeMap;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};

pub type BoardConfig = BTreeMap<String, String>;

pub fn board_from_config(config: &BoardConfig) -> ChessResult<Board> {
    let mut board = Board::empty();
    for (square_text, code) in config {
        let square = Square::from_algebraic(square_text)?;
        board.set(square, Some(Piece::from_code(code)?));
    }
    Ok(board)
}

pub fn board_to_config(board: &Board) -> BoardConfig {
    Square::all()
        .filter_map(|square| {
            board
                .piece_at(square)
                .map(|piece| (square.to_algebraic(), piece.code()))
        })
        .collect()
}

/// Decode the JSON text only; squares and codes are checked by
/// `board_from_config`.
pub fn board_config_from_json(json: &str) -> ChessResult<BoardConfig> {
    serde_json::from_str(json)
        .map_err(|err| ChessErrors::FormatError(format!("board mapping is not a JSON object of strings: {err}")))
}

pub fn board_to_json(board: &Board) -> ChessResult<String> {
    serde_json::to_string(&board_to_config(board))
        .map_err(|err| ChessErrors::FormatError(format!("board mapping could not be serialized: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;

    fn board_from_json(json: &str) -> ChessResult<Board> {
        board_from_config(&board_config_from_json(json)?)
    }

    const START_MAPPING: &str = r#"{"a8":"br","b8":"bn","c8":"bb","d8":"bq","e8":"bk","f8":"bb","g8":"bn","h8":"br",
        "a7":"bp","b7":"bp","c7":"bp","d7":"bp","e7":"bp","f7":"bp","g7":"bp","h7":"bp",
        "a2":"wp","b2":"wp","c2":"wp","d2":"wp","e2":"wp","f2":"wp","g2":"wp","h2":"wp",
        "a1":"wr","b1":"wn","c1":"wb","d1":"wq","e1":"wk","f1":"wb","g1":"wn","h1":"wr"}"#;

    #[test]
    fn start_mapping_matches_start_fen() {
        let board = board_from_json(START_MAPPING).expect("mapping should parse");
        let start = GameState::new_game().expect("start should parse");
        assert_eq!(board, start.board);
        assert_eq!(board_to_config(&board).len(), 32);
    }

    #[test]
    fn missing_squares_are_empty() {
        let board = board_from_json(r#"{"e1":"wk","e8":"bk"}"#).expect("mapping should parse");
        assert_eq!(board.occupied().len(), 2);
        assert_eq!(
            board.piece_at(Square::from_algebraic("e8").expect("e8")),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(board_to_json(&board).expect("serialize"), r#"{"e1":"wk","e8":"bk"}"#);
    }

    #[test]
    fn unknown_codes_and_squares_are_rejected() {
        assert!(matches!(board_from_json(r#"{"e1":"wx"}"#), Err(ChessErrors::FormatError(_))));
        assert!(matches!(board_from_json(r#"{"e1":"WK"}"#), Err(ChessErrors::FormatError(_))));
        assert!(matches!(board_from_json(r#"{"z9":"wk"}"#), Err(ChessErrors::InvalidSquare(_))));
        assert!(matches!(board_from_json(r#"["wk"]"#), Err(ChessErrors::FormatError(_))));
    }

    #[test]
    fn json_mapping_round_trips_through_config() {
        let json = r#"{"a1":"wr","e1":"wk","e8":"bk","h8":"br"}"#;
        let config = board_config_from_json(json).expect("mapping should decode");
        assert_eq!(config.get("a1").map(String::as_str), Some("wr"));

        let board = board_from_config(&config).expect("mapping should build a board");
        assert_eq!(board_to_json(&board).expect("serialize"), json);
        assert!(matches!(board_config_from_json("{\"e1\": 3}"), Err(ChessErrors::FormatError(_))));
    }
}
