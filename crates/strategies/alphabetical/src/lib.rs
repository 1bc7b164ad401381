//! Alphabetical Strategy
//!
//! Plays the legal move whose SAN notation sorts first. Strategy name and
//! idea from tom7's eloWorld video. Because the sort is plain byte order,
//! capitalized piece moves ("Na3") come before pawn moves ("a3").

use bot_core::{Engine, EngineError, Game, PlayResult, SearchLimits};
use shakmaty::Move;

#[cfg(test)]
mod lib_tests;

/// A strategy that plays the alphabetically first move by SAN.
#[derive(Debug, Clone, Default)]
pub struct AlphabeticalStrategy;

impl AlphabeticalStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for AlphabeticalStrategy {
    fn search(
        &mut self,
        game: &Game,
        _limits: &SearchLimits,
        _ponder: bool,
        _draw_offered: bool,
    ) -> Result<PlayResult, EngineError> {
        let mut moves: Vec<Move> = game.legal_moves().into_iter().collect();
        moves.sort_by_key(|m| game.san(m));
        Ok(PlayResult::new(moves.first().cloned()))
    }

    fn name(&self) -> &str {
        "Alphabetical"
    }
}
