mod completer;
mod editor;
mod reader;

pub use completer::ShellCompleter;
pub use editor::EditorReader;
pub use reader::{BufferedReader, Line, LineReader};
