//! Game state wrapper over the external chess rules library.
//!
//! All rules knowledge (legality, SAN/UCI notation, termination) comes from
//! shakmaty. This wrapper only adds the played move list, because the
//! external-engine protocol needs "the last move played" and shakmaty
//! positions do not carry history.

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Outcome, Position};

use crate::EngineError;

/// A chess game: the current position plus the moves that produced it.
#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Chess,
    moves: Vec<Move>,
}

impl Game {
    /// A game at the standard starting position with no moves played.
    pub fn startpos() -> Self {
        Self::default()
    }

    /// A game starting from an arbitrary FEN, with an empty move list.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| EngineError::InvalidPosition(format!("{e}")))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| EngineError::InvalidPosition(format!("{e}")))?;
        Ok(Self {
            position,
            moves: Vec::new(),
        })
    }

    /// The current position.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// All legal moves in the current position.
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// The last move played, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Apply a move, checking legality first.
    pub fn push(&mut self, m: &Move) -> Result<(), EngineError> {
        if !self.position.is_legal(m) {
            return Err(EngineError::InvalidMove(self.uci(m)));
        }
        self.position.play_unchecked(m);
        self.moves.push(m.clone());
        Ok(())
    }

    /// Parse a UCI move string and apply it.
    pub fn push_uci(&mut self, uci: &str) -> Result<Move, EngineError> {
        let m = self.parse_uci(uci)?;
        self.push(&m)?;
        Ok(m)
    }

    /// Parse a UCI move string against the current position without applying it.
    pub fn parse_uci(&self, uci: &str) -> Result<Move, EngineError> {
        let parsed: UciMove = uci
            .parse()
            .map_err(|_| EngineError::InvalidMove(uci.to_string()))?;
        parsed
            .to_move(&self.position)
            .map_err(|_| EngineError::InvalidMove(uci.to_string()))
    }

    /// UCI text for a move.
    pub fn uci(&self, m: &Move) -> String {
        UciMove::from_move(m, CastlingMode::Standard).to_string()
    }

    /// SAN text for a move in the current position.
    pub fn san(&self, m: &Move) -> String {
        San::from_move(&self.position, m).to_string()
    }

    /// Game termination, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.position.outcome()
    }

    /// Whether the game has ended by the rules (checkmate, stalemate,
    /// insufficient material).
    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Halfmove clock for the 50-move rule.
    pub fn halfmoves(&self) -> u32 {
        self.position.halfmoves()
    }

    /// Fullmove number, starting at 1.
    pub fn fullmoves(&self) -> u32 {
        self.position.fullmoves().get()
    }

    /// FEN text for the current position.
    pub fn to_fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
