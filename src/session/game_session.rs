//! One game from setup to the final move.
//!
//! `GameSession` owns the current `GameState`, the append-only move history
//! and the opponent request gate. Operations validate before they mutate;
//! the only `Err` that changes the session is an opponent timeout.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::config::EngineConfig;
use crate::game_state::chess_types::{Color, Move, Square, SquareSet};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, validate_move};
use crate::move_generation::legal_move_checks::{
    classify_position, king_square, legal_moves, PositionStatus,
};
use crate::move_generation::move_generator::MoveContext;
use crate::move_generation::special_moves::SpecialKind;
use crate::session::opponent::{OpponentRequest, OpponentResponse};
use crate::utils::board_config::{board_from_config, BoardConfig};
use crate::utils::notation::{format_move, format_movetext};
use crate::utils::random_board::random_board;

/// One committed ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub player: Color,
    pub mv: Move,
    pub resulting_fen: String,
    pub notation: String,
    pub played_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct PendingRequest {
    deadline: DateTime<Utc>,
    /// Position and history length before the local move that triggered
    /// the request.
    rollback: Option<(GameState, usize)>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    initial: GameState,
    state: GameState,
    history: Vec<HistoryEntry>,
    last_local: Option<(GameState, usize)>,
    pending: Option<PendingRequest>,
}

impl GameSession {
    pub fn new_game(config: EngineConfig) -> ChessResult<Self> {
        Self::from_state(GameState::new_game()?, config)
    }

    pub fn from_fen(fen: &str, config: EngineConfig) -> ChessResult<Self> {
        Self::from_state(GameState::from_fen(fen)?, config)
    }

    pub fn from_board_config(
        mapping: &BoardConfig,
        active_color: Color,
        config: EngineConfig,
    ) -> ChessResult<Self> {
        let board = board_from_config(mapping)?;
        Self::from_state(GameState::from_board(board, active_color), config)
    }

    /// White to move on a randomly populated board.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: EngineConfig) -> ChessResult<Self> {
        let board = random_board(rng, config.random_piece_chance)?;
        Self::from_state(GameState::from_board(board, Color::White), config)
    }

    pub fn from_state(state: GameState, config: EngineConfig) -> ChessResult<Self> {
        config.validate()?;
        debug!(fen = %state.get_fen(), "session created");
        Ok(Self {
            config,
            initial: state,
            state,
            history: Vec::new(),
            last_local: None,
            pending: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn active_color(&self) -> Color {
        self.state.active_color
    }

    pub fn fen(&self) -> String {
        self.state.get_fen()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_awaiting_opponent(&self) -> bool {
        self.pending.is_some()
    }

    pub fn opponent_deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    fn move_context(&self) -> MoveContext {
        MoveContext::for_state(&self.state, self.config.rules())
    }

    /// Legal destinations of the piece on `square`.
    ///
    /// Empty for an empty square or a piece of the side not to move.
    pub fn legal_destinations(&self, square: Square) -> ChessResult<SquareSet> {
        match self.state.board.piece_at(square) {
            Some(piece) if piece.color == self.state.active_color => {
                legal_moves(piece.color, &self.state.board, square, &self.move_context())
            }
            _ => Ok(SquareSet::EMPTY),
        }
    }

    /// Status for the side to move. Both kings must be on the board.
    pub fn status(&self) -> ChessResult<PositionStatus> {
        for color in Color::BOTH {
            king_square(&self.state.board, color)?;
        }
        classify_position(self.state.active_color, &self.state.board, &self.move_context())
    }

    /// Numbered movetext of the whole history.
    pub fn movetext(&self) -> String {
        format_movetext(
            self.history.iter().map(|entry| entry.notation.as_str()),
            self.initial.fullmove_number,
            self.initial.active_color == Color::Black,
        )
    }

    /// Apply a move entered locally. Rejected while an opponent reply is
    /// outstanding.
    pub fn apply_local_move(&mut self, mv: Move) -> ChessResult<&HistoryEntry> {
        if self.pending.is_some() {
            warn!(%mv, "local move rejected while awaiting the opponent");
            return Err(ChessErrors::AwaitingOpponent);
        }

        let before = (self.state, self.history.len());
        let index = self.commit_move(mv)?;
        self.last_local = Some(before);
        Ok(&self.history[index])
    }

    /// Close local input and describe the position for the opponent.
    pub fn request_opponent_move(&mut self) -> ChessResult<OpponentRequest> {
        self.request_opponent_move_at(Utc::now())
    }

    pub fn request_opponent_move_at(&mut self, now: DateTime<Utc>) -> ChessResult<OpponentRequest> {
        if self.pending.is_some() {
            return Err(ChessErrors::AwaitingOpponent);
        }

        let last_move = self.last_local.and(self.history.last().map(|entry| entry.mv));
        let request = OpponentRequest::new(&self.state.board, last_move);
        let deadline = now + Duration::seconds(self.config.opponent_timeout_secs);

        self.pending = Some(PendingRequest {
            deadline,
            rollback: self.last_local.take(),
        });
        debug!(%deadline, "awaiting opponent reply");
        Ok(request)
    }

    /// Apply the opponent's reply and re-open local input.
    ///
    /// A reply whose move fails validation is rejected and the request stays
    /// pending. A reply without a move only re-opens input.
    pub fn receive_opponent_response(
        &mut self,
        response: &OpponentResponse,
    ) -> ChessResult<Option<&HistoryEntry>> {
        self.receive_opponent_response_at(response, Utc::now())
    }

    pub fn receive_opponent_response_at(
        &mut self,
        response: &OpponentResponse,
        now: DateTime<Utc>,
    ) -> ChessResult<Option<&HistoryEntry>> {
        let Some(pending) = &self.pending else {
            return Err(ChessErrors::NoPendingOpponentRequest);
        };
        if now > pending.deadline {
            self.expire_opponent_request(now)?;
        }

        if let Some(stats) = &response.stats {
            for (name, value) in stats {
                info!(stat = %name, value, "opponent stats");
            }
        }

        let Some(mv) = response.parsed_move()? else {
            info!("opponent replied without a move");
            self.pending = None;
            return Ok(None);
        };

        let index = self.commit_move(mv)?;
        self.pending = None;
        Ok(Some(&self.history[index]))
    }

    /// Fail the pending request once `now` is past its deadline.
    ///
    /// Returns `Ok(false)` while the deadline has not passed. On expiry local
    /// input re-opens and, with `rollback_on_timeout`, the local move that
    /// triggered the request is undone.
    pub fn expire_opponent_request(&mut self, now: DateTime<Utc>) -> ChessResult<bool> {
        let Some(pending) = &self.pending else {
            return Err(ChessErrors::NoPendingOpponentRequest);
        };
        if now <= pending.deadline {
            return Ok(false);
        }

        let rollback = pending.rollback;
        self.pending = None;

        if self.config.rollback_on_timeout {
            if let Some((state, history_len)) = rollback {
                self.state = state;
                self.history.truncate(history_len);
                warn!(fen = %self.state.get_fen(), "opponent timed out, local move rolled back");
            }
        } else {
            warn!("opponent timed out");
        }

        Err(ChessErrors::OpponentTimeout(self.config.opponent_timeout_secs))
    }

    /// Validate and play `mv`, returning the index of its history entry.
    fn commit_move(&mut self, mv: Move) -> ChessResult<usize> {
        let rules = self.config.rules();
        let kind = validate_move(&self.state, mv, rules).inspect_err(|err| {
            warn!(%mv, error = %err, "move rejected");
        })?;

        let mv = match (kind, mv.promotion) {
            (SpecialKind::Promotion, None) => mv.with_promotion(self.config.default_promotion),
            _ => mv,
        };

        let next = apply_move(&self.state, mv)?;
        let status = classify_position(
            next.active_color,
            &next.board,
            &MoveContext::for_state(&next, rules),
        )?;
        let notation = format_move(&self.state.board, mv, status)?;

        let entry = HistoryEntry {
            player: self.state.active_color,
            mv,
            resulting_fen: next.get_fen(),
            notation,
            played_at: Utc::now(),
        };
        debug!(%mv, notation = %entry.notation, fen = %entry.resulting_fen, "move applied");

        let index = self.history.len();
        self.state = next;
        self.history.push(entry);
        if status.is_terminal() {
            info!(?status, movetext = %self.movetext(), "game over");
        }
        Ok(index)
    }
}
