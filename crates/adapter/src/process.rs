//! Spawning the external engine and exchanging lines over its streams.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use bot_core::EngineError;

use crate::protocol::Transport;

/// Options for launching the engine process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Working directory for the child (None = inherit)
    pub working_dir: Option<PathBuf>,
    /// Discard the child's stderr instead of inheriting it
    pub silence_stderr: bool,
}

/// A spawned engine process with line-based access to its streams.
///
/// The child is killed and reaped on drop; the protocol has no quit command.
#[derive(Debug)]
pub struct ChildTransport {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ChildTransport {
    /// Spawn `command` (program followed by its arguments) with piped
    /// standard streams.
    pub fn spawn(command: &[String], options: &ProcessOptions) -> Result<Self, EngineError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| EngineError::Protocol("engine command is empty".to_string()))?;

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::piped()).stdout(Stdio::piped());
        if options.silence_stderr {
            cmd.stderr(Stdio::null());
        }
        if let Some(dir) = &options.working_dir {
            cmd.current_dir(dir);
        }

        log::info!("spawning engine process {program:?}");
        let mut child = cmd.spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Protocol("child stdin not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EngineError::Protocol("child stdout not captured".to_string()))?;

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl Transport for ChildTransport {
    fn send_line(&mut self, line: &str) -> Result<(), EngineError> {
        log::debug!(">> {line}");
        writeln!(self.stdin, "{line}")?;
        self.stdin.flush()?;
        Ok(())
    }

    fn recv_line(&mut self) -> Result<String, EngineError> {
        let mut line = String::new();
        let read = self.stdout.read_line(&mut line)?;
        if read == 0 {
            return Err(EngineError::ProcessClosed);
        }
        let line = line.trim_end().to_string();
        log::debug!("<< {line}");
        Ok(line)
    }
}

impl Drop for ChildTransport {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod process_tests;
