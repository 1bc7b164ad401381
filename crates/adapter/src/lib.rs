//! Adapter between the bot's `Engine` trait and an external engine process
//! speaking a simplified line protocol over its standard streams.
//!
//! The protocol, from the host's side:
//! 1. Send the bot's color as a line, `white` or `black`.
//! 2. If the bot is White, the child immediately replies with the bot's
//!    opening move in UCI notation.
//! 3. Each turn thereafter, send the last move played (the opponent's move)
//!    in UCI notation and block until the child replies with one line:
//!    either the move to play, or the literal text `invalid`, which the
//!    host treats as a resignation.
//!
//! There is exactly one outstanding request at a time and reads block with
//! no timeout.

mod engine;
mod process;
mod protocol;

pub use engine::{ExternalEngine, ExternalEngineConfig};
pub use process::{ChildTransport, ProcessOptions};
pub use protocol::{ProtocolSession, Transport};
