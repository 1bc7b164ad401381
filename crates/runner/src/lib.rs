//! Runner for homemade bot strategies
//!
//! This crate provides the framework side of the engine seam:
//! - Loading a TOML config describing two engines and game settings
//! - Playing games between any two `Engine` implementations
//! - Recording results as JSON and printing a report
//!
//! # Usage
//!
//! ```bash
//! # Play the configured match
//! cargo run -p bot_runner -- play match.toml
//!
//! # Re-print a saved report
//! cargo run -p bot_runner -- report match_results.json
//! ```

mod config;
mod game_runner;
mod results;

pub use config::*;
pub use game_runner::*;
pub use results::*;
