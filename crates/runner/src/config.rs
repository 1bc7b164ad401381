//! TOML configuration for the runner.

use std::path::Path;

use engine_adapter::ExternalEngineConfig;
use serde::Deserialize;

/// Full runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Game settings
    #[serde(default)]
    pub game: GameSettings,
    /// Whether to honor resignations and draw offers coming from engines
    #[serde(default)]
    pub draw_or_resign: DrawOrResign,
    /// Engine playing White in the first game
    pub white: EngineSpec,
    /// Engine playing Black in the first game
    pub black: EngineSpec,
}

/// Settings for the games of a match.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Number of games to play
    pub games: u32,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Time per move handed to the engines (they may ignore it)
    pub move_time_ms: Option<u64>,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            games: 1,
            max_plies: 400,
            move_time_ms: None,
            alternate_colors: true,
        }
    }
}

/// Which engine-supplied result flags the runner acts on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawOrResign {
    /// End the game when an engine's result says it resigns
    pub resign_enabled: bool,
    /// End the game as drawn when both engines offer a draw back to back
    pub offer_draw_enabled: bool,
}

impl Default for DrawOrResign {
    fn default() -> Self {
        Self {
            resign_enabled: true,
            offer_draw_enabled: true,
        }
    }
}

/// One side's engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum EngineSpec {
    /// Uniformly random legal move
    Random,
    /// First legal move by SAN order
    Alphabetical,
    /// First legal move by UCI order
    FirstMove,
    /// External process speaking the line protocol
    External(ExternalEngineConfig),
}

impl Config {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: Config = toml::from_str(
            r#"
            [game]
            games = 4
            max_plies = 100

            [draw_or_resign]
            resign_enabled = false

            [white]
            strategy = "alphabetical"

            [black]
            strategy = "external"
            command = ["./my-engine", "--antichess"]
            working_dir = "/tmp"
            silence_stderr = true
            "#,
        )
        .unwrap();

        assert_eq!(config.game.games, 4);
        assert_eq!(config.game.max_plies, 100);
        assert!(config.game.alternate_colors);
        assert!(!config.draw_or_resign.resign_enabled);
        assert!(config.draw_or_resign.offer_draw_enabled);
        assert!(matches!(config.white, EngineSpec::Alphabetical));

        match &config.black {
            EngineSpec::External(external) => {
                assert_eq!(external.command.len(), 2);
                assert!(external.silence_stderr);
                assert!(external.working_dir.is_some());
            }
            other => panic!("expected external engine, got {other:?}"),
        }
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [white]
            strategy = "random"

            [black]
            strategy = "first_move"
            "#,
        )
        .unwrap();

        assert_eq!(config.game.games, 1);
        assert_eq!(config.game.max_plies, 400);
        assert!(config.draw_or_resign.resign_enabled);
        assert!(matches!(config.black, EngineSpec::FirstMove));
    }
}
