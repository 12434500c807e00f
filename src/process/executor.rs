use std::fmt;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use super::ProcessError;
use crate::core::tokens::Tokens;

/// Terminal state of a launched child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl Termination {
    fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Termination::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Termination::Signaled(signal);
            }
        }

        // `wait` only returns once the child is gone, so one of the above holds
        // on every supported platform.
        Termination::Exited(-1)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "exited with status {}", code),
            Termination::Signaled(signal) => write!(f, "terminated by signal {}", signal),
        }
    }
}

/// Runs external programs one at a time, blocking until each one finishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor
    }

    /// Spawn `tokens[0]` with the whole sequence as its argv and wait for it.
    ///
    /// The program is resolved through `PATH` and inherits the shell's
    /// environment and standard streams.
    pub fn launch(&self, tokens: &Tokens<'_>) -> Result<Termination, ProcessError> {
        let program = tokens.command().ok_or(ProcessError::EmptyCommand)?;

        let mut command = Command::new(program);
        command
            .args(&tokens.as_slice()[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ProcessError::NotFound(program.to_string())
            } else {
                ProcessError::Spawn {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;
        debug!("spawned {} as pid {}", program, child.id());

        let status = child.wait().map_err(|e| ProcessError::Wait {
            program: program.to_string(),
            source: e,
        })?;

        let termination = Termination::from_status(status);
        debug!("{} {}", program, termination);
        Ok(termination)
    }
}
