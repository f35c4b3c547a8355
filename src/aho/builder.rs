use std::path::Path;

use log::debug;

use super::automaton::Automaton;
use super::config::Config;
use super::error::{Error, Result};
use super::failure;
use super::pattern_source::{Pattern, PatternSource};
use super::state::{PatternId, StateId};
use super::state_arena::StateArena;

/// A builder for constructing an Aho–Corasick automaton incrementally.
///
/// Patterns are inserted into a trie one at a time, reusing any prefix that
/// earlier patterns already created. [`build`](Builder::build) then consumes
/// the builder, computes failure links and returns the read-only
/// [`Automaton`]; no insertions are possible afterwards.
///
/// Patterns may be inserted in any order.
#[derive(Clone, Debug)]
pub struct Builder {
    arena: StateArena,
    pattern_count: usize,
}

impl Builder {
    /// Creates a builder whose automaton holds at most `capacity` states,
    /// root included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero or too large
    /// to be addressed by a [`StateId`].
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Builder {
            arena: StateArena::with_capacity(capacity)?,
            pattern_count: 0,
        })
    }

    /// Creates a builder using the state capacity of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if the capacity of `config` is zero
    /// or too large to be addressed by a [`StateId`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Builder::new(config.capacity())
    }

    /// Adds a pattern that reports `id` when it matches, and returns the state
    /// its last byte leads to.
    ///
    /// An empty pattern ends at the root. Adding the same bytes again under
    /// another id records both ids on the same state, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the pattern needs more new
    /// states than the arena has left. The builder is left unchanged in that
    /// case.
    pub fn add_pattern(&mut self, pattern: impl AsRef<[u8]>, id: PatternId) -> Result<StateId> {
        let pattern = pattern.as_ref();
        let (mut state, prefix_len) = self.longest_prefix(pattern);
        let suffix = &pattern[prefix_len..];

        // Check up front so a failed insertion leaves no partial path behind.
        if suffix.len() > self.arena.remaining() {
            return Err(Error::CapacityExceeded {
                capacity: self.arena.capacity(),
            });
        }
        for &byte in suffix {
            let next = self.arena.alloc()?;
            self.arena[state].set(byte, next);
            state = next;
        }

        self.arena[state].push_own(id);
        self.pattern_count += 1;
        Ok(state)
    }

    /// Adds a pattern under the next ordinal id, i.e. the number of patterns
    /// added so far, and returns that id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyPatterns`] once every `u32` id has been handed
    /// out, and otherwise the errors of [`add_pattern`](Builder::add_pattern).
    pub fn push_pattern(&mut self, pattern: impl AsRef<[u8]>) -> Result<PatternId> {
        let id = u32::try_from(self.pattern_count)
            .map(PatternId::new)
            .map_err(|_| Error::TooManyPatterns {
                max: u32::MAX as usize + 1,
            })?;
        self.add_pattern(pattern, id)?;
        Ok(id)
    }

    /// Adds a loaded pattern under its own id.
    ///
    /// # Errors
    ///
    /// See [`add_pattern`](Builder::add_pattern).
    pub fn insert(&mut self, pattern: &Pattern) -> Result<StateId> {
        self.add_pattern(pattern.bytes(), pattern.id())
    }

    /// Returns the number of states allocated so far, root included.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of patterns added so far.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Finalizes the automaton: computes failure links and inherited outputs.
    pub fn build(mut self) -> Automaton {
        failure::link(&mut self.arena);
        debug!(
            "built automaton with {} states for {} patterns",
            self.arena.len(),
            self.pattern_count
        );
        Automaton::new(self.arena.into_states(), self.pattern_count)
    }

    /// Walks the existing trie along `pattern`, returning the deepest state
    /// reached and the number of bytes consumed.
    fn longest_prefix(&self, pattern: &[u8]) -> (StateId, usize) {
        let mut state = StateId::ROOT;
        for (i, &byte) in pattern.iter().enumerate() {
            match self.arena[state].get(byte) {
                Some(next) => state = next,
                None => return (state, i),
            }
        }
        (state, pattern.len())
    }
}

/// Builds an automaton from patterns, giving pattern `i` the id `i`.
///
/// # Examples
///
/// ```
/// use libaho::aho::{build_automaton, Config};
///
/// let automaton = build_automaton(&Config::new(16), ["abc", "bc"]).unwrap();
/// let ids: Vec<u32> = automaton
///     .find_overlapping_iter(b"xabc")
///     .map(|m| m.pattern().as_u32())
///     .collect();
/// assert_eq!(ids, [0, 1]);
/// ```
///
/// # Errors
///
/// Returns an error if the capacity of `config` is invalid or too small for
/// the patterns. No automaton is produced in that case.
pub fn build_automaton<P>(config: &Config, patterns: impl IntoIterator<Item = P>) -> Result<Automaton>
where
    P: AsRef<[u8]>,
{
    let mut builder = Builder::from_config(config)?;
    for pattern in patterns {
        builder.push_pattern(pattern)?;
    }
    Ok(builder.build())
}

/// Builds an automaton from a pattern file in the counted line format of
/// [`PatternSource`].
///
/// # Examples
///
/// ```no_run
/// use libaho::aho::{build_automaton_from_file, Config};
///
/// let automaton = build_automaton_from_file(&Config::new(1 << 16), "patterns.txt").unwrap();
/// ```
///
/// # Errors
///
/// Returns configuration, I/O and capacity errors; see [`Error`].
pub fn build_automaton_from_file(config: &Config, path: impl AsRef<Path>) -> Result<Automaton> {
    config.validate()?;
    let patterns = PatternSource::from_config(config).load_file(path)?;
    let mut builder = Builder::from_config(config)?;
    for pattern in &patterns {
        builder.insert(pattern)?;
    }
    Ok(builder.build())
}
