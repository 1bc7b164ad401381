//! Plays a single game between two engines.

use std::time::Duration;

use bot_core::{Engine, EngineError, Game, SearchLimits};
use shakmaty::Color;

use crate::config::{DrawOrResign, GameSettings};
use crate::results::{GameOutcome, GameRecord};

/// Runs games between two engines under the configured settings.
pub struct GameRunner {
    settings: GameSettings,
    draw_or_resign: DrawOrResign,
}

impl GameRunner {
    pub fn new(settings: GameSettings, draw_or_resign: DrawOrResign) -> Self {
        Self {
            settings,
            draw_or_resign,
        }
    }

    fn limits(&self) -> SearchLimits {
        match self.settings.move_time_ms {
            Some(ms) => SearchLimits::move_time(Duration::from_millis(ms)),
            None => SearchLimits::none(),
        }
    }

    /// Play one game from the starting position.
    ///
    /// Both engines are told their color before the first move, which is
    /// where the external-engine adapter runs its configure handshake.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, EngineError> {
        let mut game = Game::startpos();
        white.new_game()?;
        black.new_game()?;
        white.assign_color(Color::White)?;
        black.assign_color(Color::Black)?;

        let mut draw_offer_from: Option<Color> = None;

        let (outcome, reason) = loop {
            if let Some(rules_outcome) = game.outcome() {
                break (GameOutcome::from_rules(rules_outcome), "rules".to_string());
            }
            if game.halfmoves() >= 100 {
                break (GameOutcome::Draw, "fifty-move rule".to_string());
            }
            if game.moves().len() as u32 >= self.settings.max_plies {
                break (GameOutcome::Draw, "move limit".to_string());
            }

            let side = game.turn();
            let engine: &mut dyn Engine = if side == Color::White {
                &mut *white
            } else {
                &mut *black
            };

            let opponent_offered = draw_offer_from == Some(side.other());
            let result = engine.search(&game, &self.limits(), false, opponent_offered)?;

            if result.resigned && self.draw_or_resign.resign_enabled {
                log::info!("{} resigns", engine.name());
                break (
                    GameOutcome::win_for(side.other()),
                    format!("{} resigned", color_name(side)),
                );
            }

            if result.draw_offered && self.draw_or_resign.offer_draw_enabled {
                if opponent_offered {
                    break (GameOutcome::Draw, "draw agreed".to_string());
                }
                draw_offer_from = Some(side);
            } else if !result.draw_offered {
                draw_offer_from = draw_offer_from.filter(|&c| c != side);
            }

            match result.best_move {
                Some(m) => game.push(&m)?,
                // An engine with no move in a live position forfeits.
                None => {
                    break (
                        GameOutcome::win_for(side.other()),
                        format!("{} returned no move", color_name(side)),
                    );
                }
            }
        };

        Ok(GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves: game.moves().iter().map(|m| game.uci(m)).collect(),
            outcome,
            reason,
        })
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

#[cfg(test)]
#[path = "game_runner_tests.rs"]
mod game_runner_tests;
