use super::state::{PatternId, State, StateId};

/// A built, read-only Aho–Corasick automaton.
///
/// Obtained from [`Builder::build`](super::Builder::build). Root's transition
/// function is total; other states keep only their trie edges, and
/// [`next_state`](Automaton::next_state) follows failure links past missing
/// ones.
///
/// Every method taking a [`StateId`] panics if the id does not belong to this
/// automaton.
///
/// # Examples
///
/// ```
/// use libaho::aho::{build_automaton, Config};
///
/// let automaton = build_automaton(&Config::new(32), ["he", "she", "his", "hers"]).unwrap();
/// let found: Vec<_> = automaton
///     .find_overlapping_iter(b"ushers")
///     .map(|m| (m.pattern().index(), m.last()))
///     .collect();
/// assert_eq!(found, [(1, 3), (0, 3), (3, 5)]);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    states: Vec<State>,
    pattern_count: usize,
}

impl Automaton {
    pub(crate) fn new(states: Vec<State>, pattern_count: usize) -> Self {
        Automaton {
            states,
            pattern_count,
        }
    }

    /// Returns the root state, where every scan starts.
    #[inline]
    pub fn root(&self) -> StateId {
        StateId::ROOT
    }

    /// Returns the number of states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of patterns inserted, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Returns an iterator over all state ids, root first, in allocation order.
    pub fn states(&self) -> impl ExactSizeIterator<Item = StateId> {
        (0..self.states.len()).map(StateId::from_index)
    }

    /// Returns the goto entry for `byte`. Always `Some` at the root.
    #[inline]
    pub fn transition(&self, state: StateId, byte: u8) -> Option<StateId> {
        self.states[state.index()].get(byte)
    }

    /// Returns the failure link of `state`, or `None` for the root.
    #[inline]
    pub fn fail(&self, state: StateId) -> Option<StateId> {
        self.states[state.index()].fail()
    }

    /// Returns the patterns matched upon reaching `state`: its own, then the
    /// ones inherited along its failure chain.
    #[inline]
    pub fn outputs(&self, state: StateId) -> &[PatternId] {
        self.states[state.index()].outputs()
    }

    /// Returns only the patterns whose insertion ended at `state`.
    #[inline]
    pub fn own_outputs(&self, state: StateId) -> &[PatternId] {
        self.states[state.index()].own_outputs()
    }

    /// Returns the state reached from `state` on `byte`, following failure
    /// links while the goto entry is missing. Terminates at the latest at the
    /// root, whose transition function is total.
    #[inline]
    pub fn next_state(&self, mut state: StateId, byte: u8) -> StateId {
        loop {
            let current = &self.states[state.index()];
            if let Some(next) = current.get(byte) {
                return next;
            }
            state = current.fail().unwrap_or(StateId::ROOT);
        }
    }

    /// Returns an iterator over all matches in `haystack`, overlapping ones
    /// included.
    ///
    /// Matches come ordered by end offset; matches ending at the same offset
    /// come in output order (longest own match first).
    pub fn find_overlapping_iter<'a, 'h>(&'a self, haystack: &'h [u8]) -> FindOverlappingIter<'a, 'h> {
        FindOverlappingIter {
            automaton: self,
            haystack,
            pos: 0,
            state: StateId::ROOT,
            // Output reached before consuming a byte is not reported.
            output_pos: self.outputs(StateId::ROOT).len(),
        }
    }
}

/// A pattern occurrence found while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    pattern: PatternId,
    end: usize,
}

impl Match {
    /// Returns the identity of the matched pattern.
    pub fn pattern(&self) -> PatternId {
        self.pattern
    }

    /// Returns the exclusive end offset of the match in the haystack.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the offset of the match's final byte.
    pub fn last(&self) -> usize {
        // Matches are only reported after consuming a byte.
        self.end - 1
    }
}

/// Iterator created by [`Automaton::find_overlapping_iter`].
#[derive(Clone, Debug)]
pub struct FindOverlappingIter<'a, 'h> {
    automaton: &'a Automaton,
    haystack: &'h [u8],
    pos: usize,
    state: StateId,
    output_pos: usize,
}

impl Iterator for FindOverlappingIter<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            let outputs = self.automaton.outputs(self.state);
            if let Some(&pattern) = outputs.get(self.output_pos) {
                self.output_pos += 1;
                return Some(Match {
                    pattern,
                    end: self.pos,
                });
            }
            let &byte = self.haystack.get(self.pos)?;
            self.state = self.automaton.next_state(self.state, byte);
            self.pos += 1;
            self.output_pos = 0;
        }
    }
}
