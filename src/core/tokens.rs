//! Whitespace tokenizer.
//!
//! There is no quoting or escaping: a token is any maximal run of
//! non-delimiter characters, and runs of delimiters collapse.

use std::ops::Index;

use super::config::DEFAULT_DELIMITERS;

/// Ordered tokens borrowed from one input line.
///
/// Index 0 is the command name and the rest are its arguments. The end of the
/// sequence plays the role of the terminator: an empty line gives an empty
/// sequence, which [`Tokens::command`] reports as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    words: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    pub fn new(words: Vec<&'a str>) -> Self {
        Tokens { words }
    }

    /// Token 0, or `None` when the line held no tokens.
    pub fn command(&self) -> Option<&'a str> {
        self.get(0)
    }

    /// Token `index`, counting the command name as 0.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.words.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }
}

impl<'a> Index<usize> for Tokens<'a> {
    type Output = &'a str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl<'a> FromIterator<&'a str> for Tokens<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Tokens {
            words: iter.into_iter().collect(),
        }
    }
}

impl PartialEq<[&str]> for Tokens<'_> {
    fn eq(&self, other: &[&str]) -> bool {
        self.words.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Tokens<'_> {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.words.as_slice() == other.as_slice()
    }
}

/// Split `line` on any run of `delimiters`, dropping empty pieces.
pub fn split_line_with<'a>(line: &'a str, delimiters: &[char]) -> Tokens<'a> {
    line.split(|c: char| delimiters.contains(&c))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Split `line` on the default delimiter set.
pub fn split_line(line: &str) -> Tokens<'_> {
    split_line_with(line, DEFAULT_DELIMITERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_of_spaces_collapse() {
        assert_eq!(split_line("a  b   c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_mixed_delimiters() {
        let tokens = split_line("\tls\x07 -l\r\n/tmp \t");
        assert_eq!(tokens, ["ls", "-l", "/tmp"]);
        assert_eq!(tokens.command(), Some("ls"));
        assert_eq!(tokens.get(1), Some("-l"));
        assert_eq!(tokens[2], "/tmp");
        assert_eq!(tokens.get(3), None);
    }

    #[test]
    fn test_delimiter_only_lines_are_empty() {
        for line in ["", " ", "\t\t", " \r\n", "\x07 \x07", "   \t  \n"] {
            let tokens = split_line(line);
            assert!(tokens.is_empty(), "{:?} produced {:?}", line, tokens);
            assert_eq!(tokens.command(), None);
        }
    }

    #[test]
    fn test_no_quoting() {
        assert_eq!(
            split_line("echo \"hello world\""),
            ["echo", "\"hello", "world\""]
        );
        assert_eq!(split_line("rm a\\ b"), ["rm", "a\\", "b"]);
    }

    #[test]
    fn test_tokens_borrow_from_line() {
        let line = String::from("cd /tmp");
        let tokens = split_line(&line);
        let start = line.as_ptr() as usize;
        let second = tokens[1].as_ptr() as usize;
        assert_eq!(second - start, 3);
    }

    #[test]
    fn test_custom_delimiters() {
        let tokens = split_line_with("a,b,,c d", &[',']);
        assert_eq!(tokens, ["a", "b", "c d"]);
    }

    #[test]
    fn test_long_line_has_no_token_limit() {
        let line = vec!["x"; 1000].join(" ");
        let tokens = split_line(&line);
        assert_eq!(tokens.len(), 1000);
        assert!(tokens.iter().all(|t| t == "x"));
    }
}
