use log::debug;

use super::{Command, CommandError, Outcome, Streams};
use crate::core::tokens::Tokens;
use crate::process::ProcessExecutor;

/// Hands a bare `ls` to the external program. Any argument turns it into a
/// no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct LsCommand {
    process_executor: ProcessExecutor,
}

impl LsCommand {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        Self { process_executor }
    }
}

impl Command for LsCommand {
    fn execute(&self, tokens: &Tokens<'_>, _io: &mut Streams<'_>) -> Result<Outcome, CommandError> {
        if tokens.len() > 1 {
            debug!("ls given arguments, ignoring");
            return Ok(Outcome::Continue);
        }

        self.process_executor.launch(&Tokens::new(vec!["ls"]))?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::capture;
    use crate::core::tokens::split_line;

    #[cfg(unix)]
    #[test]
    fn test_ls_without_arguments_runs_ls() {
        let cmd = LsCommand::new(ProcessExecutor::new());
        let (result, captured) = capture(|io| cmd.execute(&split_line("ls"), io));
        assert_eq!(result.unwrap(), Outcome::Continue);
        assert!(captured.err.is_empty());
    }

    #[test]
    fn test_ls_with_argument_does_nothing() {
        let cmd = LsCommand::default();
        for line in ["ls -l", "ls /nonexistent-path-xyz", "ls a b"] {
            let (result, captured) = capture(|io| cmd.execute(&split_line(line), io));
            assert_eq!(result.unwrap(), Outcome::Continue);
            assert!(captured.out.is_empty());
            assert!(captured.err.is_empty());
        }
    }
}
