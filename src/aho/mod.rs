/// Automaton construction: trie insertion and the final build step.
pub mod builder;
/// The built, read-only automaton and its scanning interface.
pub mod automaton;
/// Construction parameters.
pub mod config;
/// Error type for loading patterns and building automatons.
pub mod error;
/// Failure-link computation over a complete trie.
pub(crate) mod failure;
/// Loading patterns from the counted line format.
pub mod pattern_source;
/// State, state id and pattern id types.
pub mod state;
/// Fixed-capacity state storage.
pub(crate) mod state_arena;

pub use automaton::{Automaton, FindOverlappingIter, Match};
pub use builder::{build_automaton, build_automaton_from_file, Builder};
pub use config::{Config, DEFAULT_MAX_PATTERNS};
pub use error::{Error, Result};
pub use pattern_source::{Pattern, PatternSource};
pub use state::{PatternId, StateId, ALPHABET_SIZE};
