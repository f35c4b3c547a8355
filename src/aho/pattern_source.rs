//! Loading patterns from a counted, line-oriented text source.
//!
//! The format is a decimal pattern count on the first line, followed by that
//! many lines, one pattern per line:
//!
//! ```text
//! 3
//! he
//! she
//! hers
//! ```
//!
//! Pattern lines are raw bytes: only the trailing `\n` is removed, so
//! patterns may contain spaces, tabs, `\r` or non-UTF-8 bytes.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::info;

use super::config::{Config, DEFAULT_MAX_PATTERNS};
use super::error::{Error, Result};
use super::state::PatternId;

/// A pattern together with the identity reported when it matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    id: PatternId,
    bytes: Vec<u8>,
}

impl Pattern {
    /// Creates a pattern.
    pub fn new(id: PatternId, bytes: impl Into<Vec<u8>>) -> Self {
        Pattern {
            id,
            bytes: bytes.into(),
        }
    }

    /// Returns the identity of this pattern.
    pub fn id(&self) -> PatternId {
        self.id
    }

    /// Returns the pattern's bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the pattern length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the pattern has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reads patterns in the counted line format, rejecting sources that announce
/// more than a configured number of patterns.
///
/// # Examples
///
/// ```
/// use libaho::aho::{PatternId, PatternSource};
///
/// let source = PatternSource::new(10);
/// let patterns = source.load("2\nfoo\nbar baz\n".as_bytes()).unwrap();
/// assert_eq!(patterns.len(), 2);
/// assert_eq!(patterns[1].id(), PatternId::new(1));
/// assert_eq!(patterns[1].bytes(), b"bar baz");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PatternSource {
    max_patterns: usize,
}

impl Default for PatternSource {
    fn default() -> Self {
        PatternSource::new(DEFAULT_MAX_PATTERNS)
    }
}

impl PatternSource {
    /// Creates a source accepting at most `max_patterns` patterns.
    pub fn new(max_patterns: usize) -> Self {
        PatternSource { max_patterns }
    }

    /// Creates a source using the pattern limit of `config`.
    pub fn from_config(config: &Config) -> Self {
        PatternSource::new(config.max_patterns())
    }

    /// Reads patterns from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read, and the
    /// errors of [`load`](Self::load) for malformed content.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<Pattern>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_patterns(BufReader::new(file), path)
    }

    /// Reads patterns from any buffered reader.
    ///
    /// # Errors
    ///
    /// * [`Error::PatternCount`] if the first line is not a decimal count
    ///   between 0 and the configured maximum.
    /// * [`Error::MissingPatterns`] if fewer pattern lines follow than the
    ///   count announces.
    /// * [`Error::Io`] if reading fails.
    pub fn load(&self, reader: impl BufRead) -> Result<Vec<Pattern>> {
        self.read_patterns(reader, Path::new("<reader>"))
    }

    fn read_patterns(&self, mut reader: impl BufRead, path: &Path) -> Result<Vec<Pattern>> {
        let io_error = |source: io::Error| Error::Io {
            path: PathBuf::from(path),
            source,
        };

        // One buffer is reused for every line instead of allocating per line.
        let mut buf = Vec::with_capacity(80);
        reader.read_until(b'\n', &mut buf).map_err(io_error)?;
        let count = self.parse_count(&buf)?;

        let mut patterns = Vec::with_capacity(count);
        for i in 0..count {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(io_error)? == 0 {
                return Err(Error::MissingPatterns {
                    expected: count,
                    found: i,
                });
            }
            let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            // `parse_count` keeps `count` within `u32`.
            patterns.push(Pattern::new(PatternId::new(i as u32), line));
        }

        info!("num_patterns = {}", patterns.len());
        Ok(patterns)
    }

    fn parse_count(&self, line: &[u8]) -> Result<usize> {
        let text = String::from_utf8_lossy(line);
        let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
        let invalid = || Error::PatternCount {
            count: text.to_string(),
            max: self.max_patterns,
        };
        let count: i64 = text.parse().map_err(|_| invalid())?;
        let count = usize::try_from(count).map_err(|_| invalid())?;
        if count > self.max_patterns || u32::try_from(count).is_err() {
            return Err(invalid());
        }
        Ok(count)
    }
}
