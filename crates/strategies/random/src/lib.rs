//! Random Move Strategy
//!
//! The simplest possible strategy: pick uniformly at random from all legal
//! moves. Useful for:
//! - Testing the bot plumbing before wiring in a real engine
//! - Baseline comparisons (any real engine should easily beat this)

use bot_core::{Engine, EngineError, Game, PlayResult, SearchLimits};
use rand::seq::SliceRandom;
use rand::thread_rng;
use shakmaty::Move;


/// A strategy that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomStrategy {
    fn search(
        &mut self,
        game: &Game,
        _limits: &SearchLimits,
        _ponder: bool,
        _draw_offered: bool,
    ) -> Result<PlayResult, EngineError> {
        let moves: Vec<Move> = game.legal_moves().into_iter().collect();
        let best_move = moves.choose(&mut thread_rng()).cloned();
        Ok(PlayResult::new(best_move))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
