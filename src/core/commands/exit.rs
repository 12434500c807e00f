use super::{Command, CommandError, Outcome, Streams};
use crate::core::tokens::Tokens;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _tokens: &Tokens<'_>, _io: &mut Streams<'_>) -> Result<Outcome, CommandError> {
        Ok(Outcome::Terminate)
    }
}
