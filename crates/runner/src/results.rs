//! Game records, match scoring, and report output.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shakmaty::{Color, Outcome};

/// How a single game ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    /// A win for the given color.
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => Self::WhiteWins,
            Color::Black => Self::BlackWins,
        }
    }

    /// Translate a rules-level termination (checkmate, stalemate, ...).
    pub fn from_rules(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Decisive { winner } => Self::win_for(winner),
            Outcome::Draw => Self::Draw,
        }
    }
}

/// Record of one finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Moves played, in UCI notation, oldest first
    pub moves: Vec<String>,
    pub outcome: GameOutcome,
    /// Human-readable termination reason ("checkmate", "white resigned", ...)
    pub reason: String,
}

/// Tally of a match from the first engine's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchScore {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchScore {
    /// Count one game. `engine1_white` says which color the first engine had.
    pub fn add(&mut self, outcome: GameOutcome, engine1_white: bool) {
        let engine1_color = if engine1_white {
            Color::White
        } else {
            Color::Black
        };
        match outcome {
            GameOutcome::Draw => self.draws += 1,
            _ if outcome == GameOutcome::win_for(engine1_color) => self.wins += 1,
            _ => self.losses += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first engine's perspective (1 win, 0.5 draw, 0 loss).
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Everything worth keeping from one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub score: MatchScore,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            score: MatchScore::default(),
            games: Vec::new(),
        }
    }

    /// Record a finished game. `engine1_white` says which color the first
    /// engine had in this game.
    pub fn add_game(&mut self, record: GameRecord, engine1_white: bool) {
        self.score.add(record.outcome, engine1_white);
        self.games.push(record);
    }

    /// Save the report to a JSON file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Score: {}-{}-{} ({:.1}%)\n\n",
            self.score.wins,
            self.score.losses,
            self.score.draws,
            self.score.score() * 100.0
        ));

        for (index, game) in self.games.iter().enumerate() {
            let outcome = match game.outcome {
                GameOutcome::WhiteWins => "1-0",
                GameOutcome::BlackWins => "0-1",
                GameOutcome::Draw => "1/2",
            };
            report.push_str(&format!(
                "Game {}: {} vs {} {} ({}, {} plies)\n",
                index + 1,
                game.white,
                game.black,
                outcome,
                game.reason,
                game.moves.len()
            ));
        }

        report
    }

    /// Print the report to stdout.
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
