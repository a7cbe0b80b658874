//! Wire types exchanged with the remote opponent.
//!
//! A request carries the board after the local move plus that move; the
//! reply names the opponent's move (if any) and optional search statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::utils::board_config::{board_to_config, BoardConfig};
use crate::utils::long_algebraic::parse_long_algebraic;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentRequest {
    pub board: BoardConfig,
    /// Absent when the opponent is asked to open the game.
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub last_move: Option<String>,
}

impl OpponentRequest {
    pub fn new(board: &Board, last_move: Option<Move>) -> Self {
        Self {
            board: board_to_config(board),
            last_move: last_move.map(|mv| mv.to_string()),
        }
    }

    pub fn to_json(&self) -> ChessResult<String> {
        serde_json::to_string(self)
            .map_err(|err| ChessErrors::FormatError(format!("opponent request: {err}")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentResponse {
    #[serde(rename = "next-move", default, skip_serializing_if = "Option::is_none")]
    pub next_move: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<BTreeMap<String, u64>>,
}

impl OpponentResponse {
    pub fn from_json(json: &str) -> ChessResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChessErrors::FormatError(format!("opponent response: {err}")))
    }

    /// The reply move, or `None` when the opponent has nothing to play.
    pub fn parsed_move(&self) -> ChessResult<Option<Move>> {
        self.next_move
            .as_deref()
            .map(parse_long_algebraic)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;

    #[test]
    fn request_uses_protocol_field_names() {
        let start = GameState::new_game().expect("start should parse");
        let e2 = Square::from_algebraic("e2").expect("e2");
        let e4 = Square::from_algebraic("e4").expect("e4");
        let board = start.board.with_move(e2, e4, None);

        let request = OpponentRequest::new(&board, Some(Move::new(e2, e4)));
        let value: serde_json::Value =
            serde_json::from_str(&request.to_json().expect("serialize")).expect("valid JSON");

        assert_eq!(value["move"], "e2-e4");
        assert_eq!(value["board"]["e4"], "wp");
        assert!(value["board"].get("e2").is_none());
    }

    #[test]
    fn opening_request_omits_move() {
        let start = GameState::new_game().expect("start should parse");
        let json = OpponentRequest::new(&start.board, None).to_json().expect("serialize");
        assert!(!json.contains("\"move\""));
    }

    #[test]
    fn response_with_move_and_stats() {
        let response =
            OpponentResponse::from_json(r#"{"next-move": "e7-e5", "stats": {"nodes": 1234, "depth": 3}}"#)
                .expect("response should parse");
        let mv = response.parsed_move().expect("move should parse").expect("move present");
        assert_eq!(mv.to_string(), "e7-e5");
        assert_eq!(response.stats.as_ref().and_then(|s| s.get("nodes")), Some(&1234));
    }

    #[test]
    fn empty_response_has_no_move() {
        let response = OpponentResponse::from_json("{}").expect("response should parse");
        assert_eq!(response.parsed_move(), Ok(None));
        assert!(OpponentResponse::from_json(r#"{"next-move": 5}"#).is_err());
    }
}
