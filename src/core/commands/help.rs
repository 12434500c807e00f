use super::{Builtin, Command, CommandError, Outcome, Streams};
use crate::core::tokens::Tokens;

const BANNER: &str = "Type in the commands, and hit enter.\nThe following are built in:";
const FOOTER: &str = "Use the 'man' command for commands not implemented into this project.";

#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _tokens: &Tokens<'_>, io: &mut Streams<'_>) -> Result<Outcome, CommandError> {
        writeln!(io.out, "{}", BANNER)?;
        for name in Builtin::names() {
            writeln!(io.out, "  {}", name)?;
        }
        writeln!(io.out, "{}", FOOTER)?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::capture;
    use crate::core::tokens::split_line;

    #[test]
    fn test_help_listing() {
        let (result, captured) = capture(|io| HelpCommand.execute(&split_line("help"), io));
        assert_eq!(result.unwrap(), Outcome::Continue);
        assert_eq!(
            captured.out(),
            "Type in the commands, and hit enter.\n\
             The following are built in:\n  \
             cd\n  help\n  exit\n  ls\n  echo\n  rm\n\
             Use the 'man' command for commands not implemented into this project.\n"
        );
        assert!(captured.err.is_empty());
    }

    #[test]
    fn test_help_ignores_arguments() {
        let (_, plain) = capture(|io| HelpCommand.execute(&split_line("help"), io));
        let (_, with_args) = capture(|io| HelpCommand.execute(&split_line("help cd rm"), io));
        assert_eq!(plain.out, with_args.out);
    }

    #[test]
    fn test_help_lists_exactly_the_builtins() {
        let (_, captured) = capture(|io| HelpCommand.execute(&split_line("help"), io));
        let listed: Vec<String> = captured
            .out()
            .lines()
            .filter_map(|line| line.strip_prefix("  "))
            .map(str::to_string)
            .collect();
        assert_eq!(listed, ["cd", "help", "exit", "ls", "echo", "rm"]);
    }
}
