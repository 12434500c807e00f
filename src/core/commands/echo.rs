use super::{Command, CommandError, Outcome, Streams};
use crate::core::tokens::Tokens;

/// Prints its first argument and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, tokens: &Tokens<'_>, io: &mut Streams<'_>) -> Result<Outcome, CommandError> {
        writeln!(io.out, "{}", tokens.get(1).unwrap_or_default())?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::capture;
    use crate::core::tokens::split_line;

    #[test]
    fn test_echo_prints_first_argument() {
        let (result, captured) = capture(|io| EchoCommand.execute(&split_line("echo hello"), io));
        assert_eq!(result.unwrap(), Outcome::Continue);
        assert_eq!(captured.out(), "hello\n");
        assert!(captured.err.is_empty());
    }

    #[test]
    fn test_echo_without_argument_prints_empty_line() {
        let (result, captured) = capture(|io| EchoCommand.execute(&split_line("echo"), io));
        assert_eq!(result.unwrap(), Outcome::Continue);
        assert_eq!(captured.out(), "\n");
    }

    #[test]
    fn test_echo_drops_extra_arguments() {
        let (_, captured) = capture(|io| EchoCommand.execute(&split_line("echo one two  three"), io));
        assert_eq!(captured.out(), "one\n");
    }
}
