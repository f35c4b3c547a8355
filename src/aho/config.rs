use super::error::Result;
use super::state_arena::check_capacity;

/// Upper bound on the number of patterns a pattern file may announce, unless
/// overridden with [`Config::with_max_patterns`].
pub const DEFAULT_MAX_PATTERNS: usize = 1 << 20;

/// Construction parameters for an automaton.
///
/// The state capacity has no default: it bounds the memory an automaton may
/// take (each state carries a 256-entry transition table), so callers must
/// pick it explicitly. One state per pattern byte plus the root is always
/// enough.
///
/// ```
/// use libaho::aho::Config;
///
/// let config = Config::new(4096).with_max_patterns(100);
/// assert_eq!(config.capacity(), 4096);
/// assert_eq!(config.max_patterns(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    capacity: usize,
    max_patterns: usize,
}

impl Config {
    /// Creates a configuration with the given state capacity.
    pub fn new(capacity: usize) -> Self {
        Config {
            capacity,
            max_patterns: DEFAULT_MAX_PATTERNS,
        }
    }

    /// Sets the largest pattern count a [`PatternSource`](super::PatternSource)
    /// built from this configuration accepts.
    pub fn with_max_patterns(mut self, max_patterns: usize) -> Self {
        self.max_patterns = max_patterns;
        self
    }

    /// Returns the maximum number of states, root included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the maximum number of patterns a pattern file may announce.
    pub fn max_patterns(&self) -> usize {
        self.max_patterns
    }

    /// Checks that the capacity can hold the root and is addressable by a
    /// [`StateId`](super::StateId).
    pub fn validate(&self) -> Result<()> {
        check_capacity(self.capacity)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aho::error::Error;
    use crate::aho::state::StateId;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = Config::new(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidCapacity(0)));
    }

    #[test]
    fn unaddressable_capacity_is_rejected() {
        let capacity = StateId::MAX_CAPACITY + 1;
        let err = Config::new(capacity).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidCapacity(c) if c == capacity));
    }

    #[test]
    fn root_only_capacity_is_valid() {
        assert!(Config::new(1).validate().is_ok());
    }

    #[test]
    fn max_patterns_defaults() {
        assert_eq!(Config::new(8).max_patterns(), DEFAULT_MAX_PATTERNS);
    }
}
