use super::{Command, CommandError, Outcome, Streams};
use crate::core::tokens::Tokens;
use std::env;

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, tokens: &Tokens<'_>, _io: &mut Streams<'_>) -> Result<Outcome, CommandError> {
        let path = tokens.get(1).ok_or(CommandError::MissingArgument("cd"))?;

        env::set_current_dir(path).map_err(|source| CommandError::ChangeDir {
            path: path.to_string(),
            source,
        })?;

        Ok(Outcome::Continue)
    }
}
