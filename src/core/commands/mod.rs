use std::io::Write;

use log::debug;

mod cd;
mod echo;
mod exit;
mod help;
mod ls;
mod rm;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use rm::RmCommand;

use crate::core::tokens::Tokens;
use crate::process::{ProcessError, ProcessExecutor};

/// Prefix for every diagnostic the shell itself writes.
pub const DIAGNOSTIC_PREFIX: &str = "funsh";

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminate,
}

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    ChangeDir {
        path: String,
        source: std::io::Error,
    },
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(cmd) => write!(f, "expected argument for \"{}\"", cmd),
            CommandError::ChangeDir { path, source } => write!(f, "cd: {}: {}", path, source),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// Output and error sinks handed to a command.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Streams { out, err }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

pub trait Command {
    /// `tokens[0]` is the command's own name.
    fn execute(&self, tokens: &Tokens<'_>, io: &mut Streams<'_>) -> Result<Outcome, CommandError>;
}

/// The builtin commands, in the order `help` lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Help,
    Exit,
    Ls,
    Echo,
    Rm,
}

pub static BUILTINS: [Builtin; 6] = [
    Builtin::Cd,
    Builtin::Help,
    Builtin::Exit,
    Builtin::Ls,
    Builtin::Echo,
    Builtin::Rm,
];

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
            Builtin::Ls => "ls",
            Builtin::Echo => "echo",
            Builtin::Rm => "rm",
        }
    }

    /// First entry of [`BUILTINS`] whose name is exactly `name`.
    pub fn lookup(name: &str) -> Option<Builtin> {
        BUILTINS.iter().copied().find(|builtin| builtin.name() == name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|builtin| builtin.name())
    }

    /// Runs the handler. `ls` launches through `process_executor`.
    pub fn execute(
        self,
        tokens: &Tokens<'_>,
        io: &mut Streams<'_>,
        process_executor: ProcessExecutor,
    ) -> Result<Outcome, CommandError> {
        match self {
            Builtin::Cd => CdCommand.execute(tokens, io),
            Builtin::Help => HelpCommand.execute(tokens, io),
            Builtin::Exit => ExitCommand.execute(tokens, io),
            Builtin::Ls => LsCommand::new(process_executor).execute(tokens, io),
            Builtin::Echo => EchoCommand.execute(tokens, io),
            Builtin::Rm => RmCommand.execute(tokens, io),
        }
    }
}

/// Routes a token sequence to a builtin, or to an external program when no
/// builtin has that name.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Never fails: errors are written to `io.err` and the loop goes on.
    pub fn execute(&self, tokens: &Tokens<'_>, io: &mut Streams<'_>) -> Outcome {
        let Some(name) = tokens.command() else {
            return Outcome::Continue;
        };

        let result = match Builtin::lookup(name) {
            Some(builtin) => {
                debug!("dispatching builtin {}", name);
                builtin.execute(tokens, io, self.process_executor)
            }
            None => {
                debug!("launching external command {}", name);
                self.process_executor
                    .launch(tokens)
                    .map(|_| Outcome::Continue)
                    .map_err(CommandError::from)
            }
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Err(write_err) = writeln!(io.err, "{}: {}", DIAGNOSTIC_PREFIX, e) {
                    debug!("could not report error: {}", write_err);
                }
                Outcome::Continue
            }
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        Builtin::lookup(command).is_some()
    }
}
