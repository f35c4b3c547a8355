use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading patterns or building an automaton.
///
/// Construction is all-or-nothing: whenever one of these is returned, no
/// automaton is produced.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured state capacity cannot hold even the root state, or is
    /// too large to be addressed by a [`StateId`](super::StateId).
    #[error("invalid state capacity: {0}")]
    InvalidCapacity(usize),

    /// The pattern count header is malformed, negative or above the
    /// configured maximum.
    #[error("invalid pattern count {count:?} (maximum is {max})")]
    PatternCount {
        /// The count header as it appeared in the source.
        count: String,
        /// The configured maximum number of patterns.
        max: usize,
    },

    /// The source ended before all announced patterns were read.
    #[error("expected {expected} patterns, found only {found}")]
    MissingPatterns {
        /// Number of patterns announced by the count header.
        expected: usize,
        /// Number of pattern lines actually present.
        found: usize,
    },

    /// A builder ran out of ordinal pattern ids.
    #[error("too many patterns: ordinal ids are limited to {max}")]
    TooManyPatterns {
        /// The largest number of ordinal ids a builder can hand out.
        max: usize,
    },

    /// Inserting a pattern would allocate more states than the arena holds.
    #[error("state capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// The configured state capacity.
        capacity: usize,
    },

    /// The pattern source could not be opened or read.
    #[error("cannot read patterns from {}: {source}", .path.display())]
    Io {
        /// Path of the pattern source, or `<reader>` for in-memory sources.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = Error::CapacityExceeded { capacity: 16 };
        assert_eq!(err.to_string(), "state capacity of 16 exceeded");

        let err = Error::PatternCount {
            count: "-3".to_string(),
            max: 10,
        };
        assert_eq!(err.to_string(), "invalid pattern count \"-3\" (maximum is 10)");
    }

    #[test]
    fn io_error_keeps_its_source() {
        use std::error::Error as _;

        let err = Error::Io {
            path: PathBuf::from("patterns.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("cannot read patterns from patterns.txt"));
        assert!(err.source().is_some());
    }
}
