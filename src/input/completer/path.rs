use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes file and directory names for argument words.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, word: &str) -> Vec<Pair> {
        let (dir, prefix, shown_dir) = split_word(word);

        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) {
                    return None;
                }
                let shown = format!("{}{}", shown_dir, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", shown),
                        replacement: format!("{}/", shown),
                    }
                } else {
                    Pair {
                        display: shown.clone(),
                        replacement: format!("{} ", shown),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits `word` into the directory to list, the file-name prefix to match,
/// and the text to put back in front of each match.
fn split_word(word: &str) -> (PathBuf, &str, &str) {
    match word.rfind('/') {
        Some(slash) => {
            let shown_dir = &word[..=slash];
            let dir = if shown_dir == "/" {
                PathBuf::from("/")
            } else {
                Path::new(shown_dir).to_path_buf()
            };
            (dir, &word[slash + 1..], shown_dir)
        }
        None => (PathBuf::from("."), word, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("foo"), (PathBuf::from("."), "foo", ""));
        assert_eq!(split_word("/us"), (PathBuf::from("/"), "us", "/"));
        assert_eq!(split_word("a/b/c"), (PathBuf::from("a/b/"), "c", "a/b/"));
        assert_eq!(split_word("dir/"), (PathBuf::from("dir/"), "", "dir/"));
    }

    #[test]
    fn test_complete_files_and_dirs() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("other"), "").unwrap();

        let word = format!("{}/n", temp.path().display());
        let pairs = PathCompleter::new().complete_path(&word);
        let replacements: Vec<String> = pairs.into_iter().map(|p| p.replacement).collect();

        let base = temp.path().display();
        assert_eq!(
            replacements,
            [format!("{}/nested/", base), format!("{}/notes.txt ", base)]
        );
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let pairs = PathCompleter::new().complete_path("/nonexistent-path-xyz/a");
        assert!(pairs.is_empty());
    }
}
