use std::io::{self, IsTerminal};

use log::debug;

mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Outcome, Streams, DIAGNOSTIC_PREFIX},
        config::Config,
    },
    error::ShellError,
    input::{BufferedReader, EditorReader, LineReader},
};

use executor::CommandHandler;

/// The read-eval loop.
pub struct Shell {
    reader: Box<dyn LineReader>,
    executor: CommandExecutor,
    config: Config,
}

impl Shell {
    /// Reads from stdin, with line editing when stdin is a terminal.
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let reader: Box<dyn LineReader> = if io::stdin().is_terminal() {
            Box::new(EditorReader::new()?)
        } else {
            Box::new(BufferedReader::new(io::stdin().lock(), io::stdout()))
        };
        Ok(Self::with_reader(config, reader))
    }

    pub fn with_reader(config: Config, reader: Box<dyn LineReader>) -> Self {
        Shell {
            reader,
            executor: CommandExecutor::new(),
            config,
        }
    }

    /// Runs until `exit` or the end of input, writing to the process's
    /// stdout and stderr.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut out = io::stdout();
        let mut err = io::stderr();
        let mut streams = Streams::new(&mut out, &mut err);
        self.run_with(&mut streams)
    }

    pub fn run_with(&mut self, io: &mut Streams<'_>) -> Result<(), ShellError> {
        while self.step(io)? == Outcome::Continue {}
        Ok(())
    }

    /// One prompt, read, and dispatch.
    ///
    /// The line that hits the end of the stream is still dispatched; after it
    /// the outcome is always [`Outcome::Terminate`].
    pub fn step(&mut self, io: &mut Streams<'_>) -> Result<Outcome, ShellError> {
        let line = self.reader.read_line(self.config.prompt())?;
        let outcome = match line.text() {
            Ok(text) => self.execute_line(text, io),
            Err(e) => {
                writeln!(
                    io.err,
                    "{}: input is not valid UTF-8: {}",
                    DIAGNOSTIC_PREFIX, e
                )?;
                Outcome::Continue
            }
        };
        io.flush()?;

        if line.is_end_of_stream() {
            debug!("input exhausted, leaving loop");
            return Ok(Outcome::Terminate);
        }
        Ok(outcome)
    }
}
