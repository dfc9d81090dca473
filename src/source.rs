//! Line sources for the corpus and the stopword list
//!
//! The pipeline never touches the filesystem directly; it asks a
//! [`LineSource`] to open a fresh line stream. Opening is where
//! `SourceUnavailable` is raised.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SourceKind, WordFreqError};

/// A provider of text lines that can be opened (and re-opened) on demand
pub trait LineSource {
    type Lines: Iterator<Item = io::Result<String>>;

    /// Open a fresh, single-pass line stream.
    fn open(&self) -> io::Result<Self::Lines>;

    /// Human-readable location used in error messages.
    fn location(&self) -> String;

    /// Open the source, mapping failure to `SourceUnavailable`.
    fn open_as(&self, kind: SourceKind) -> Result<Self::Lines> {
        self.open().map_err(|err| {
            debug!(%kind, location = %self.location(), error = %err, "source unavailable");
            WordFreqError::unavailable(kind, self.location(), err)
        })
    }
}

/// A text file read line by line
///
/// Bytes that are not valid UTF-8 decode to U+FFFD instead of failing
/// the read.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    type Lines = LossyLines<BufReader<File>>;

    fn open(&self) -> io::Result<Self::Lines> {
        let file = File::open(&self.path)?;
        Ok(lossy_lines(BufReader::new(file)))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Lines held in memory; useful for embedded word lists and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a block of text on line breaks.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }
}

impl LineSource for MemorySource {
    type Lines = std::iter::Map<std::vec::IntoIter<String>, fn(String) -> io::Result<String>>;

    fn open(&self) -> io::Result<Self::Lines> {
        Ok(self.lines.clone().into_iter().map(Ok as fn(String) -> io::Result<String>))
    }

    fn location(&self) -> String {
        format!("<memory: {} lines>", self.lines.len())
    }
}

/// Drain a source into owned lines, mapping read failures to `SourceRead`.
pub fn read_all_lines<S: LineSource + ?Sized>(source: &S, kind: SourceKind) -> Result<Vec<String>> {
    let lines = source.open_as(kind)?;
    lines
        .map(|line| line.map_err(|err| WordFreqError::read(kind, source.location(), err)))
        .collect()
}

/// Lines of a `BufRead`, decoded lossily
///
/// Splits on `\n` and drops a trailing `\r`, like [`BufRead::lines`], but a
/// line with invalid UTF-8 is still yielded. Only real I/O failures are errors.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
