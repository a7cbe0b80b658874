//! Crate root module declarations for the Sleddog chess rules engine.
//!
//! Exposes the board model, move generation and legality checks, text
//! codecs, and the game session that drives a single game against a
//! remote opponent.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod move_generator;
    pub mod perft;
    pub mod special_moves;
}

pub mod session {
    pub mod game_session;
    pub mod opponent;
}

pub mod utils {
    pub mod board_config;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod notation;
    pub mod random_board;
    pub mod render_board;
}
