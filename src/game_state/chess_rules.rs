//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position and the original
//! king/rook columns that castling is defined against.

use serde::{Deserialize, Serialize};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_KING_TARGET_COL: u8 = 6;
pub const QUEENSIDE_KING_TARGET_COL: u8 = 2;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;

/// How castling availability is decided during move generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastlingPolicy {
    /// King and rook on their original squares with only empty squares
    /// between them. Move history and attacked squares are not consulted.
    #[default]
    Positional,
    /// Positional requirements plus the FEN castling right, a king that is
    /// not in check, and no attacked square on the king's path.
    Standard,
}

/// Rule switches threaded through move generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub castling: CastlingPolicy,
}

impl RuleSet {
    pub const POSITIONAL: RuleSet = RuleSet {
        castling: CastlingPolicy::Positional,
    };

    pub const STANDARD: RuleSet = RuleSet {
        castling: CastlingPolicy::Standard,
    };
}
