//! Engine configuration.
//!
//! Loaded from JSON; every field is optional and falls back to
//! `EngineConfig::default()`. Values are validated once on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{CastlingPolicy, RuleSet};
use crate::game_state::chess_types::PieceKind;
use crate::utils::random_board::DEFAULT_PIECE_CHANCE;

const MAX_OPPONENT_TIMEOUT_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub castling_policy: CastlingPolicy,
    /// Seconds the opponent has to answer a move request.
    pub opponent_timeout_secs: i64,
    /// Undo the local move when the opponent times out.
    pub rollback_on_timeout: bool,
    /// Percent chance that a square of a random board holds a piece.
    pub random_piece_chance: u8,
    /// Piece a pawn becomes when a promotion arrives without a choice.
    pub default_promotion: PieceKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            castling_policy: CastlingPolicy::Positional,
            opponent_timeout_secs: 30,
            rollback_on_timeout: false,
            random_piece_chance: DEFAULT_PIECE_CHANCE,
            default_promotion: PieceKind::Queen,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|err| ChessErrors::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> ChessResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|err| ChessErrors::InvalidConfig(format!("{}: {err}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> ChessResult<()> {
        if !(1..=MAX_OPPONENT_TIMEOUT_SECS).contains(&self.opponent_timeout_secs) {
            return Err(ChessErrors::InvalidConfig(format!(
                "opponent_timeout_secs must be between 1 and {MAX_OPPONENT_TIMEOUT_SECS}, got {}",
                self.opponent_timeout_secs
            )));
        }
        if self.random_piece_chance > 100 {
            return Err(ChessErrors::InvalidConfig(format!(
                "random_piece_chance must be at most 100, got {}",
                self.random_piece_chance
            )));
        }
        if !self.default_promotion.is_promotion_target() {
            return Err(ChessErrors::InvalidConfig(format!(
                "default_promotion cannot be {:?}",
                self.default_promotion
            )));
        }
        Ok(())
    }

    pub fn rules(&self) -> RuleSet {
        RuleSet {
            castling: self.castling_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::CastlingPolicy;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn empty_object_gives_defaults() {
        let config = EngineConfig::from_json_str("{}").expect("defaults should load");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.castling_policy, CastlingPolicy::Positional);
    }

    #[test]
    fn partial_override() {
        let config = EngineConfig::from_json_str(
            r#"{"castling_policy": "standard", "rollback_on_timeout": true, "default_promotion": "knight"}"#,
        )
        .expect("config should load");
        assert_eq!(config.castling_policy, CastlingPolicy::Standard);
        assert!(config.rollback_on_timeout);
        assert_eq!(config.default_promotion, PieceKind::Knight);
        assert_eq!(config.opponent_timeout_secs, 30);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for json in [
            r#"{"opponent_timeout_secs": 0}"#,
            r#"{"opponent_timeout_secs": 100000000000}"#,
            r#"{"random_piece_chance": 150}"#,
            r#"{"default_promotion": "king"}"#,
            r#"{"castling_policy": "chess960"}"#,
            r#"{"unknown_field": 1}"#,
            "not json",
        ] {
            assert!(
                matches!(EngineConfig::from_json_str(json), Err(ChessErrors::InvalidConfig(_))),
                "{json} should be rejected"
            );
        }
    }
}
