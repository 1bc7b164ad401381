pub mod game;
pub mod limits;

pub use game::Game;
pub use limits::{Clock, SearchLimits};

use shakmaty::{Color, Move};
use thiserror::Error;

// =============================================================================
// Engine trait — implemented by all move-selection strategies and by the
// external-process adapter.
// =============================================================================

/// Errors an engine can produce while selecting a move.
///
/// The bundled example strategies never fail; these variants exist for
/// engines that talk to an external process.
#[derive(Debug, Error)]
pub enum EngineError {
    /// I/O failure on the engine's streams.
    #[error("engine i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine process closed its output (EOF) while a reply was expected.
    #[error("engine process closed its output stream")]
    ProcessClosed,

    /// The exchange with the engine violated the expected protocol.
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The engine replied with text that is not a legal move here.
    #[error("engine sent an unusable move: {0:?}")]
    InvalidMove(String),

    /// A position could not be set up (bad FEN).
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

/// A move plus optional metadata returned by a move-selection call.
#[derive(Debug, Clone, Default)]
pub struct PlayResult {
    /// The move to play (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Whether the engine resigns instead of playing on
    pub resigned: bool,
    /// Whether the engine offers a draw alongside its move
    pub draw_offered: bool,
}

impl PlayResult {
    /// A plain move with no metadata.
    pub fn new(best_move: Option<Move>) -> Self {
        Self {
            best_move,
            resigned: false,
            draw_offered: false,
        }
    }

    /// A resignation. The move (if any) is a legal fallback in case the
    /// caller does not honor resignations.
    pub fn resign(best_move: Option<Move>) -> Self {
        Self {
            best_move,
            resigned: true,
            draw_offered: false,
        }
    }
}

/// Trait that all engines must implement.
///
/// This allows swapping between the trivial example strategies and an
/// adapter around an external engine process.
pub trait Engine: Send {
    /// Pick a move for the side to move in `game`.
    ///
    /// # Arguments
    /// * `game` - Current position plus the moves that led to it
    /// * `limits` - Time/depth budget supplied by the caller (strategies
    ///   that ignore time may disregard it)
    /// * `ponder` - Whether the caller wants the engine to keep thinking
    ///   on the opponent's time (unused by the bundled strategies)
    /// * `draw_offered` - Whether the opponent has offered a draw
    fn search(
        &mut self,
        game: &Game,
        limits: &SearchLimits,
        ponder: bool,
        draw_offered: bool,
    ) -> Result<PlayResult, EngineError>;

    /// Returns the engine's display name.
    fn name(&self) -> &str;

    /// Tell the engine which color it plays. Called once, before the first
    /// `search` of a game. Engines that do not care keep the default no-op.
    fn assign_color(&mut self, _color: Color) -> Result<(), EngineError> {
        Ok(())
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    /// Release any resources (child processes, handles) held by the engine.
    fn shutdown(&mut self) -> Result<(), EngineError> {
        Ok(())
    }
}
