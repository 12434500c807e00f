use std::borrow::Cow;

/// Prompt written before every read.
pub const DEFAULT_PROMPT: &str = "Shell:)>";

/// Space, tab, carriage return, newline and bell.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Fixed shell settings, built once before the loop starts.
#[derive(Debug, Clone)]
pub struct Config {
    prompt: Cow<'static, str>,
    delimiters: Cow<'static, [char]>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            prompt: Cow::Borrowed(DEFAULT_PROMPT),
            delimiters: Cow::Borrowed(DEFAULT_DELIMITERS),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<Cow<'static, str>>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_delimiters(mut self, delimiters: impl Into<Cow<'static, [char]>>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt(), "Shell:)>");
        assert_eq!(config.delimiters(), &[' ', '\t', '\r', '\n', '\x07']);
    }

    #[test]
    fn test_overrides() {
        let config = Config::new().with_prompt("$ ").with_delimiters(vec![',']);
        assert_eq!(config.prompt(), "$ ");
        assert_eq!(config.delimiters(), &[',']);
    }
}
