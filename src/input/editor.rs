use log::debug;
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use super::{Line, LineReader, ShellCompleter};
use crate::error::ShellError;

/// Terminal line editing with in-memory history and tab completion.
pub struct EditorReader {
    editor: Editor<ShellCompleter, DefaultHistory>,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!("could not add history entry: {}", e);
                    }
                }
                Ok(Line::new(line))
            }
            // Ctrl-C drops whatever was typed.
            Err(ReadlineError::Interrupted) => Ok(Line::new("")),
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                Ok(Line::last(""))
            }
            Err(e) => Err(e.into()),
        }
    }
}
