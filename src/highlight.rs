use inksac::prelude::*;

use crate::core::commands::Builtin;
use crate::core::config::DEFAULT_DELIMITERS;

/// Colours the command word of the line being edited: builtins in green,
/// anything else in cyan.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self::with_support(support)
    }

    pub fn with_support(color_support: ColorSupport) -> Self {
        Self { color_support }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Leaves every byte outside the command word untouched, so cursor
    /// positions stay valid.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let Some((start, end)) = command_span(input) else {
            return input.to_string();
        };

        let word = &input[start..end];
        let color = if Builtin::lookup(word).is_some() {
            Color::Green
        } else {
            Color::Cyan
        };
        let style = Style::builder().foreground(color).bold().build();

        format!("{}{}{}", &input[..start], word.style(style), &input[end..])
    }
}

/// Byte range of the first token in `input`.
fn command_span(input: &str) -> Option<(usize, usize)> {
    let is_delim = |c: char| DEFAULT_DELIMITERS.contains(&c);
    let start = input.find(|c: char| !is_delim(c))?;
    let end = input[start..]
        .find(is_delim)
        .map_or(input.len(), |offset| start + offset);
    Some((start, end))
}
