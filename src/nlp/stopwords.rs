//! Stopword set
//!
//! Words are lowercased once at load time, so membership of a normalized
//! token is a plain hash lookup. Lists come from a whitespace-delimited
//! source (one collaborator-provided word list) or from the `stop-words`
//! crate's built-in lists.

use std::io::BufRead;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::error::{Result, SourceKind, WordFreqError};
use crate::source::{lossy_lines, LineSource};

/// An immutable set of lowercase stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (nothing is filtered)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw words; each is lowercased, duplicates collapse
    pub fn load<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// Create a stopword set from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self::load(words.iter().copied())
    }

    /// Read whitespace-delimited words from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut set = Self::empty();
        for line in lossy_lines(reader) {
            set.extend(line?.split_whitespace());
        }
        Ok(set)
    }

    /// Load from a line source. A source that cannot be opened is fatal.
    pub fn from_source<S: LineSource + ?Sized>(source: &S) -> Result<Self> {
        let lines = source.open_as(SourceKind::Stopwords)?;
        let mut set = Self::empty();
        for line in lines {
            let line = line
                .map_err(|err| WordFreqError::read(SourceKind::Stopwords, source.location(), err))?;
            set.extend(line.split_whitespace());
        }
        debug!(location = %source.location(), count = set.len(), "loaded stopwords");
        Ok(set)
    }

    /// Built-in list for a language code or name
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar.
    /// Unknown languages fall back to English.
    pub fn builtin(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => {
                debug!(language = other, "unknown stopword language, using English");
                LANGUAGE::English
            }
        };

        Self::load(get(lang).iter())
    }

    /// Add words to the set, lowercasing each
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Exact lookup of an already-normalized token
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Lookup that lowercases the query first
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) || !word.is_ascii() {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::load(iter)
    }
}
