//! `Engine` implementation backed by an external process.

use std::path::PathBuf;

use bot_core::{Engine, EngineError, Game, PlayResult, SearchLimits};
use serde::Deserialize;
use shakmaty::Color;

use crate::process::{ChildTransport, ProcessOptions};
use crate::protocol::ProtocolSession;

/// Configuration for an external engine, as it appears in the bot config.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalEngineConfig {
    /// Display name (defaults to the program name)
    pub name: Option<String>,
    /// Program and arguments used to launch the engine
    pub command: Vec<String>,
    /// Working directory for the engine process
    pub working_dir: Option<PathBuf>,
    /// Discard the engine's stderr
    #[serde(default)]
    pub silence_stderr: bool,
}

impl ExternalEngineConfig {
    fn process_options(&self) -> ProcessOptions {
        ProcessOptions {
            working_dir: self.working_dir.clone(),
            silence_stderr: self.silence_stderr,
        }
    }

    /// Display name: the configured name, or the program's file name.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.command
            .first()
            .map(|program| {
                PathBuf::from(program)
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_else(|| program.clone())
            })
            .unwrap_or_else(|| "external".to_string())
    }
}

/// An engine that delegates every move to a spawned child process over the
/// line protocol. One child per game; dropping the engine kills the child.
#[derive(Debug)]
pub struct ExternalEngine {
    name: String,
    session: ProtocolSession<ChildTransport>,
}

impl ExternalEngine {
    /// Spawn the configured process and run the initialize step.
    pub fn spawn(config: &ExternalEngineConfig) -> Result<Self, EngineError> {
        let transport = ChildTransport::spawn(&config.command, &config.process_options())?;
        let mut session = ProtocolSession::new(transport);
        session.initialize()?;
        Ok(Self {
            name: config.display_name(),
            session,
        })
    }
}

impl Engine for ExternalEngine {
    fn search(
        &mut self,
        game: &Game,
        _limits: &SearchLimits,
        _ponder: bool,
        _draw_offered: bool,
    ) -> Result<PlayResult, EngineError> {
        self.session.play(game)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn assign_color(&mut self, color: Color) -> Result<(), EngineError> {
        self.session.configure(color)
    }
}
