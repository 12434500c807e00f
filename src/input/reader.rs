use std::io::{BufRead, Write};
use std::string::FromUtf8Error;

use crate::error::ShellError;

/// One line of input, without its newline.
///
/// Bytes that are not valid UTF-8 are kept out of the text entirely rather
/// than substituted, so no command ever sees a path that was not typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: Result<String, FromUtf8Error>,
    end_of_stream: bool,
}

impl Default for Line {
    fn default() -> Self {
        Line::new("")
    }
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Line {
            text: Ok(text.into()),
            end_of_stream: false,
        }
    }

    /// The last line a stream will produce. May be empty.
    pub fn last(text: impl Into<String>) -> Self {
        Line {
            text: Ok(text.into()),
            end_of_stream: true,
        }
    }

    pub fn from_bytes(bytes: Vec<u8>, end_of_stream: bool) -> Self {
        Line {
            text: String::from_utf8(bytes),
            end_of_stream,
        }
    }

    pub fn text(&self) -> Result<&str, &FromUtf8Error> {
        self.text.as_deref()
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.end_of_stream
    }
}

pub trait LineReader {
    /// Show `prompt`, then block until a newline or the end of the stream.
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError>;
}

/// Reads from any buffered stream, writing the prompt to `prompt_out`.
pub struct BufferedReader<R, W> {
    input: R,
    prompt_out: W,
    buffer: Vec<u8>,
}

impl<R: BufRead, W: Write> BufferedReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self {
            input,
            prompt_out,
            buffer: Vec::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.prompt_out)
    }
}

impl<R: BufRead, W: Write> LineReader for BufferedReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        self.buffer.clear();
        self.input.read_until(b'\n', &mut self.buffer)?;

        let end_of_stream = self.buffer.last() != Some(&b'\n');
        if !end_of_stream {
            self.buffer.pop();
        }

        Ok(Line::from_bytes(std::mem::take(&mut self.buffer), end_of_stream))
    }
}
