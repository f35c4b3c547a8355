use std::fmt;

use smallvec::SmallVec;

/// Number of symbols in the input alphabet: every byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Identifies a state: an index into the automaton's state arena.
///
/// The sentinel [`StateId::UNDEFINED`] marks a missing transition or an unset
/// failure link, so a transition table is a plain array of ids.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
    /// The root state. It is always the first state allocated.
    pub const ROOT: StateId = StateId(0);

    /// Sentinel for "no state".
    pub(crate) const UNDEFINED: StateId = StateId(u32::MAX);

    /// Largest number of states an arena may hold; the sentinel value is
    /// never handed out as a real id.
    pub const MAX_CAPACITY: usize = u32::MAX as usize;

    /// Creates a state id from an arena index.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::MAX_CAPACITY);
        StateId(index as u32)
    }

    /// Returns the arena index of this state.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }

    /// Returns `None` for the sentinel.
    #[inline]
    pub(crate) fn defined(self) -> Option<StateId> {
        (!self.is_undefined()).then_some(self)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity reported when a pattern matches.
///
/// Patterns loaded from a [`PatternSource`](super::PatternSource) or inserted
/// with [`Builder::push_pattern`](super::Builder::push_pattern) get their
/// 0-based ordinal; [`Builder::add_pattern`](super::Builder::add_pattern)
/// accepts any id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct PatternId(u32);

impl PatternId {
    /// Creates a pattern id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        PatternId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the id as an index, e.g. into the pattern list it came from.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PatternId {
    fn from(id: u32) -> Self {
        PatternId(id)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pattern ids matched upon reaching a state. Most states end at most one
/// pattern and inherit few, so this rarely spills to the heap.
pub(crate) type Outputs = SmallVec<[PatternId; 2]>;

/// A single automaton state.
#[derive(Clone, Debug)]
pub(crate) struct State {
    transitions: [StateId; ALPHABET_SIZE],
    fail: StateId,
    /// Own matches first, then the ones inherited through `fail`.
    output: Outputs,
    own: usize,
}

impl State {
    /// Creates a state with no transitions, no failure link and no output.
    pub(crate) fn new() -> Self {
        State {
            transitions: [StateId::UNDEFINED; ALPHABET_SIZE],
            fail: StateId::UNDEFINED,
            output: Outputs::new(),
            own: 0,
        }
    }

    /// Returns the state the `byte` edge leads to, or None if no such edge exists.
    #[inline]
    pub(crate) fn get(&self, byte: u8) -> Option<StateId> {
        self.transitions[byte as usize].defined()
    }

    /// Sets the `byte` edge.
    #[inline]
    pub(crate) fn set(&mut self, byte: u8, target: StateId) {
        debug_assert!(!target.is_undefined());
        self.transitions[byte as usize] = target;
    }

    /// Returns an iterator over all defined edges, in byte order.
    #[inline]
    pub(crate) fn children(&self) -> Children<'_> {
        Children {
            transitions: &self.transitions,
            next: 0,
        }
    }

    #[inline]
    pub(crate) fn fail(&self) -> Option<StateId> {
        self.fail.defined()
    }

    #[inline]
    pub(crate) fn set_fail(&mut self, fail: StateId) {
        self.fail = fail;
    }

    /// All pattern ids matched at this state.
    #[inline]
    pub(crate) fn outputs(&self) -> &[PatternId] {
        &self.output
    }

    /// Pattern ids whose insertion ended at this state.
    #[inline]
    pub(crate) fn own_outputs(&self) -> &[PatternId] {
        &self.output[..self.own]
    }

    /// Records a pattern ending at this state.
    pub(crate) fn push_own(&mut self, id: PatternId) {
        debug_assert_eq!(self.own, self.output.len(), "own outputs precede inherited ones");
        self.output.push(id);
        self.own += 1;
    }

    /// Appends matches inherited through the failure link.
    pub(crate) fn inherit(&mut self, inherited: &[PatternId]) {
        self.output.extend_from_slice(inherited);
    }
}

/// An iterator over the defined edges of a [`State`].
#[derive(Clone)]
pub(crate) struct Children<'a> {
    transitions: &'a [StateId; ALPHABET_SIZE],
    next: usize,
}

impl Iterator for Children<'_> {
    type Item = (u8, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.next < ALPHABET_SIZE {
            let byte = self.next;
            self.next += 1;
            if let Some(target) = self.transitions[byte].defined() {
                return Some((byte as u8, target));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(ALPHABET_SIZE - self.next))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_children() {
        let s = State::new();
        assert_eq!(s.children().next(), None);
        assert_eq!(s.get(b'a'), None);
        assert_eq!(s.fail(), None);
        assert!(s.outputs().is_empty());
    }

    #[test]
    fn children_in_byte_order() {
        let mut s = State::new();
        s.set(b'z', StateId::from_index(3));
        s.set(0, StateId::from_index(1));
        s.set(255, StateId::from_index(2));
        let children: Vec<_> = s.children().collect();
        assert_eq!(
            children,
            [
                (0, StateId::from_index(1)),
                (b'z', StateId::from_index(3)),
                (255, StateId::from_index(2)),
            ]
        );
        assert_eq!(s.get(b'z'), Some(StateId::from_index(3)));
    }

    #[test]
    fn own_outputs_precede_inherited() {
        let mut s = State::new();
        s.push_own(PatternId::new(4));
        s.push_own(PatternId::new(7));
        s.inherit(&[PatternId::new(1), PatternId::new(2)]);
        assert_eq!(s.own_outputs(), [PatternId::new(4), PatternId::new(7)]);
        assert_eq!(
            s.outputs(),
            [4, 7, 1, 2].map(PatternId::new)
        );
    }

    #[test]
    fn sentinel_is_not_a_state() {
        assert_eq!(StateId::UNDEFINED.defined(), None);
        assert_eq!(StateId::ROOT.defined(), Some(StateId::ROOT));
    }
}
