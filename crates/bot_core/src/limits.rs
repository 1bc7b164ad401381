//! Search limits passed to engines.
//!
//! The bot framework supplies a per-move time budget or the full game clocks.
//! The bundled example strategies answer instantly and ignore these; the
//! external-engine adapter forwards nothing and blocks without a timeout.
//! The types still flow through `Engine::search` so that strategies which do
//! manage time have what they need.

use std::time::Duration;

use shakmaty::Color;

/// Remaining game clocks for both sides, with increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    /// White's remaining time
    pub wtime: Duration,
    /// Black's remaining time
    pub btime: Duration,
    /// White's per-move increment
    pub winc: Duration,
    /// Black's per-move increment
    pub binc: Duration,
}

impl Clock {
    /// Remaining time for one side.
    pub fn time_for(&self, color: Color) -> Duration {
        match color {
            Color::White => self.wtime,
            Color::Black => self.btime,
        }
    }

    /// Per-move increment for one side.
    pub fn increment_for(&self, color: Color) -> Duration {
        match color {
            Color::White => self.winc,
            Color::Black => self.binc,
        }
    }
}

/// Limits that describe how long an engine may think about one move.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Maximum search depth in plies (None = engine's choice)
    pub depth: Option<u8>,
    /// Fixed time for this move (None = use the clock, or no limit)
    pub move_time: Option<Duration>,
    /// Game clocks (None = not a timed game)
    pub clock: Option<Clock>,
}

impl SearchLimits {
    /// No constraints at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Depth-only limit.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            ..Self::default()
        }
    }

    /// Fixed time per move.
    pub fn move_time(move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            ..Self::default()
        }
    }

    /// Full game clocks.
    pub fn clock(clock: Clock) -> Self {
        Self {
            clock: Some(clock),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
