//! The line-protocol handshake: initialize / configure / play.

use bot_core::{EngineError, Game, PlayResult};
use shakmaty::Color;

/// Literal reply meaning the child refuses the move it was sent.
const INVALID_REPLY: &str = "invalid";

/// One line out, one line in. Implemented by the child-process transport;
/// tests use a scripted stand-in.
pub trait Transport {
    /// Send one line (without trailing newline) and flush.
    fn send_line(&mut self, line: &str) -> Result<(), EngineError>;

    /// Block until one line arrives. EOF is `ProcessClosed`.
    fn recv_line(&mut self) -> Result<String, EngineError>;
}

/// State of a single game's exchange with the child process.
///
/// The session owns the pending-first-move stash: when the bot plays White
/// the child answers the color line with the bot's opening move before any
/// `play` call happens, and the first `play` must return that stashed move
/// instead of talking to the child again.
#[derive(Debug)]
pub struct ProtocolSession<T> {
    transport: T,
    initialized: bool,
    pending_first_move: Option<String>,
}

impl<T: Transport> ProtocolSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            initialized: false,
            pending_first_move: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Mark the session live. The protocol has no hello exchange, so this
    /// only guards against double initialization.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.initialized {
            return Err(EngineError::Protocol(
                "engine already initialized".to_string(),
            ));
        }
        self.initialized = true;
        log::info!("engine session initialized");
        Ok(())
    }

    /// Tell the child which color the bot plays.
    ///
    /// As White the bot moves first, so the child answers immediately with
    /// the opening move; stash it for the first `play`. As Black the color
    /// line is the end of the exchange.
    pub fn configure(&mut self, color: Color) -> Result<(), EngineError> {
        let label = match color {
            Color::White => "white",
            Color::Black => "black",
        };
        self.transport.send_line(label)?;

        if color == Color::White {
            let line = self.transport.recv_line()?;
            log::info!("received opening move {line:?}");
            self.pending_first_move = Some(line);
        }
        Ok(())
    }

    /// One request/response cycle: send the last move played, block for the
    /// child's reply, and decode it.
    pub fn play(&mut self, game: &Game) -> Result<PlayResult, EngineError> {
        if let Some(line) = self.pending_first_move.take() {
            return decode_reply(game, &line);
        }

        let last = game.last_move().ok_or_else(|| {
            EngineError::Protocol(
                "play called with no move to send and no pending first move".to_string(),
            )
        })?;
        self.transport.send_line(&game.uci(last))?;

        let line = self.transport.recv_line()?;
        log::info!("received {line:?}");
        decode_reply(game, &line)
    }
}

/// Decode one reply line: a UCI move, or `invalid` meaning resignation.
fn decode_reply(game: &Game, line: &str) -> Result<PlayResult, EngineError> {
    if line == INVALID_REPLY {
        // Resign, carrying an arbitrary legal move in case the caller
        // ignores resignations.
        let fallback = game.legal_moves().first().cloned();
        return Ok(PlayResult::resign(fallback));
    }
    let m = game.parse_uci(line)?;
    Ok(PlayResult::new(Some(m)))
}
