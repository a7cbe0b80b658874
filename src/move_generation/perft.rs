use std::thread;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, legal_move_list};
use crate::move_generation::legal_move_checks::{classify_position, PositionStatus};
use crate::move_generation::move_generator::MoveContext;
use crate::move_generation::special_moves::{classify, SpecialKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf-node count only; skips the per-leaf status classification.
pub fn perft_nodes(game_state: &GameState, depth: u8, rules: RuleSet) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_move_list(game_state, rules)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        let child = apply_move(game_state, mv)?;
        nodes += perft_nodes(&child, depth - 1, rules)?;
    }
    Ok(nodes)
}

pub fn perft(game_state: &GameState, depth: u8, rules: RuleSet) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    perft_recurse(game_state, depth, rules, &mut total)?;
    Ok(total)
}

/// Splits the root moves across scoped threads, one per move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8, rules: RuleSet) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth, rules);
    }

    let root_moves = legal_move_list(game_state, rules)?;

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || -> ChessResult<PerftCounts> {
                    let mut local = PerftCounts::default();
                    let child = apply_move(game_state, mv)?;
                    perft_recurse(&child, depth - 1, rules, &mut local)?;
                    Ok(local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle
                .join()
                .map_err(|_| ChessErrors::WorkerFailed("perft root move".to_owned()))??;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse(
    game_state: &GameState,
    depth: u8,
    rules: RuleSet,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    for mv in legal_move_list(game_state, rules)? {
        let child = apply_move(game_state, mv)?;

        if depth > 1 {
            perft_recurse(&child, depth - 1, rules, counts)?;
            continue;
        }

        counts.nodes += 1;
        let kind = classify(&game_state.board, mv.from, mv.to);
        match kind {
            SpecialKind::EnPassantCapture => {
                counts.captures += 1;
                counts.en_passant += 1;
            }
            SpecialKind::CastleKingside | SpecialKind::CastleQueenside => counts.castles += 1,
            SpecialKind::Promotion => counts.promotions += 1,
            SpecialKind::None => {}
        }
        if kind != SpecialKind::EnPassantCapture && game_state.board.piece_at(mv.to).is_some() {
            counts.captures += 1;
        }

        let ctx = MoveContext::for_state(&child, rules);
        match classify_position(child.active_color, &child.board, &ctx)? {
            PositionStatus::Check => counts.checks += 1,
            PositionStatus::Checkmate => {
                counts.checks += 1;
                counts.checkmates += 1;
            }
            PositionStatus::Ongoing | PositionStatus::Stalemate => {}
        }
    }

    Ok(())
}
