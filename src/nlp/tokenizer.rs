//! Word tokenizer
//!
//! A token is one or more ASCII letter runs joined by single `'` or `-`
//! separators: `letters ( ('|-) letters )*`. Everything else on a line is
//! skipped. Tokens are lowercased before they are yielded, and each line is
//! scanned on its own, so nothing is joined across a line break.

use std::sync::{Arc, LazyLock};

use regex::Regex;

/// Default token grammar
pub const WORD_PATTERN: &str = r"[a-zA-Z]+(?:['-][a-zA-Z]+)*";

static WORD_REGEX: LazyLock<Arc<Regex>> =
    LazyLock::new(|| Arc::new(Regex::new(WORD_PATTERN).expect("word pattern is a valid regex")));

/// Regex-driven word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Arc<Regex>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            pattern: Arc::clone(&WORD_REGEX),
        }
    }

    /// Tokens of a single line, in order
    pub fn tokenize_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        self.pattern
            .find_iter(line)
            .map(|m| m.as_str().to_ascii_lowercase())
    }

    /// Lazily tokenize a sequence of lines
    ///
    /// The returned iterator is single-pass; tokenize a fresh line source to
    /// start over.
    pub fn tokenize<I>(&self, lines: I) -> Tokens<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Tokens {
            pattern: Arc::clone(&self.pattern),
            lines: lines.into_iter(),
            pending: Vec::new().into_iter(),
        }
    }
}

/// Iterator returned by [`Tokenizer::tokenize`]
///
/// Holds only the tokens of the line currently being drained.
#[derive(Debug)]
pub struct Tokens<I> {
    pattern: Arc<Regex>,
    lines: I,
    pending: std::vec::IntoIter<String>,
}

impl<I> Iterator for Tokens<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(token);
            }
            let line = self.lines.next()?;
            let found: Vec<String> = self
                .pattern
                .find_iter(line.as_ref())
                .map(|m| m.as_str().to_ascii_lowercase())
                .collect();
            self.pending = found.into_iter();
        }
    }
}

/// Tokenize lines with the default tokenizer
pub fn tokenize<I>(lines: I) -> Tokens<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Tokenizer::new().tokenize(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_tokens(line: &str) -> Vec<String> {
        Tokenizer::new().tokenize_line(line).collect()
    }

    #[test]
    fn test_basic_words_lowercased() {
        assert_eq!(line_tokens("The Cat SAT"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_hyphen_and_apostrophe_joined() {
        assert_eq!(line_tokens("A well-known's fact"), vec!["a", "well-known's", "fact"]);
        assert_eq!(line_tokens("Don't"), vec!["don't"]);
    }

    #[test]
    fn test_leading_and_trailing_punctuation_dropped() {
        assert_eq!(line_tokens("'quoted' -dash- end-"), vec!["quoted", "dash", "end"]);
        assert_eq!(line_tokens("--well--known"), vec!["well", "known"]);
        assert_eq!(line_tokens("rock'n'roll"), vec!["rock'n'roll"]);
    }

    #[test]
    fn test_digits_and_symbols_skipped() {
        assert_eq!(line_tokens("chapter 12: 3.14 abc123def"), vec!["chapter", "abc", "def"]);
        assert!(line_tokens("123 !!! ...").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_break_tokens() {
        assert_eq!(line_tokens("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_no_join_across_lines() {
        let tokens: Vec<_> = tokenize(["well-", "known"]).collect();
        assert_eq!(tokens, vec!["well", "known"]);
    }

    #[test]
    fn test_empty_lines_yield_nothing() {
        let tokens: Vec<_> = tokenize(["", "   ", "the cat", "", "ran"]).collect();
        assert_eq!(tokens, vec!["the", "cat", "ran"]);
    }

    #[test]
    fn test_idempotent_per_line() {
        let line = "It's a well-known fact, isn't it? 42 times!";
        assert_eq!(line_tokens(line), line_tokens(line));
    }

    #[test]
    fn test_owned_lines() {
        let lines = vec!["Alice was".to_string(), "beginning".to_string()];
        let tokens: Vec<_> = tokenize(lines).collect();
        assert_eq!(tokens, vec!["alice", "was", "beginning"]);
    }
}
