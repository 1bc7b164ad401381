//! First Move Strategy
//!
//! Plays the legal move whose UCI representation sorts first ("a2a3" at the
//! starting position). Completely deterministic, which makes it handy as the
//! opponent in protocol and plumbing tests.

use bot_core::{Engine, EngineError, Game, PlayResult, SearchLimits};
use shakmaty::Move;

#[cfg(test)]
mod lib_tests;

/// A strategy that plays the first move when sorted by UCI representation.
#[derive(Debug, Clone, Default)]
pub struct FirstMoveStrategy;

impl FirstMoveStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for FirstMoveStrategy {
    fn search(
        &mut self,
        game: &Game,
        _limits: &SearchLimits,
        _ponder: bool,
        _draw_offered: bool,
    ) -> Result<PlayResult, EngineError> {
        let mut moves: Vec<Move> = game.legal_moves().into_iter().collect();
        moves.sort_by_key(|m| game.uci(m));
        Ok(PlayResult::new(moves.first().cloned()))
    }

    fn name(&self) -> &str {
        "FirstMove"
    }
}
