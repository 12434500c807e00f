use log::debug;

use crate::core::commands::{Outcome, Streams};
use crate::core::tokens::split_line_with;

pub(crate) trait CommandHandler {
    fn execute_line(&self, line: &str, io: &mut Streams<'_>) -> Outcome;
}

impl CommandHandler for super::Shell {
    fn execute_line(&self, line: &str, io: &mut Streams<'_>) -> Outcome {
        let tokens = split_line_with(line, self.config.delimiters());
        if tokens.is_empty() {
            return Outcome::Continue;
        }

        debug!("tokens: {:?}", tokens.as_slice());
        self.executor.execute(&tokens, io)
    }
}
