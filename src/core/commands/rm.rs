use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use super::{Command, CommandError, Outcome, Streams};
use crate::core::tokens::Tokens;

const REMOVED: &str = "The file has been successfully deleted.";
const NOT_REMOVED: &str = "There was an error deleting the file.";

#[derive(Debug, Clone, Copy, Default)]
pub struct RmCommand;

impl RmCommand {
    /// Removes a file, a symlink, or an empty directory.
    fn remove(path: &Path) -> io::Result<()> {
        if fs::symlink_metadata(path)?.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }
}

impl Command for RmCommand {
    fn execute(&self, tokens: &Tokens<'_>, io: &mut Streams<'_>) -> Result<Outcome, CommandError> {
        let path = tokens.get(1).ok_or(CommandError::MissingArgument("rm"))?;

        match Self::remove(Path::new(path)) {
            Ok(()) => writeln!(io.out, "{}", REMOVED)?,
            Err(e) => {
                debug!("rm {}: {}", path, e);
                writeln!(io.out, "{}", NOT_REMOVED)?;
            }
        }

        Ok(Outcome::Continue)
    }
}
