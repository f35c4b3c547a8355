//! Fixed-capacity, index-addressed storage for automaton states.
//!
//! States refer to each other by [`StateId`], so failure links can point
//! anywhere (including back up the trie) without ownership issues. The
//! arena owns the "next free state" counter; nothing is shared between
//! arenas.

use std::ops::{Index, IndexMut};

use log::debug;

use super::error::{Error, Result};
use super::state::{State, StateId};

/// How often allocation progress is logged.
const PROGRESS_INTERVAL: usize = 10_000;

/// Upper bound on the states reserved up front. Larger arenas grow on
/// demand, still bounded by their capacity.
const INITIAL_RESERVE: usize = 1024;

/// Checks that `capacity` holds at least the root and is addressable.
pub(crate) fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 || capacity > StateId::MAX_CAPACITY {
        return Err(Error::InvalidCapacity(capacity));
    }
    Ok(())
}

/// An arena of at most `capacity` states. The root is allocated on creation.
#[derive(Clone, Debug)]
pub(crate) struct StateArena {
    states: Vec<State>,
    capacity: usize,
}

impl StateArena {
    /// Creates an arena holding only the root state.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        let mut states = Vec::with_capacity(capacity.min(INITIAL_RESERVE));
        states.push(State::new());
        Ok(StateArena { states, capacity })
    }

    /// Allocates a fresh state and returns its id.
    pub(crate) fn alloc(&mut self) -> Result<StateId> {
        let len = self.states.len();
        if len == self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.states.push(State::new());
        if (len + 1) % PROGRESS_INTERVAL == 0 {
            debug!("number of states = {}", len + 1);
        }
        Ok(StateId::from_index(len))
    }

    /// Returns the number of states allocated in this arena, root included.
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many more states can be allocated.
    pub(crate) fn remaining(&self) -> usize {
        self.capacity - self.states.len()
    }

    /// Gives up the arena, keeping only the allocated states.
    pub(crate) fn into_states(self) -> Vec<State> {
        self.states
    }
}

impl Index<StateId> for StateArena {
    type Output = State;

    #[inline]
    fn index(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }
}

impl IndexMut<StateId> for StateArena {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_with_root() {
        let arena = StateArena::with_capacity(4).unwrap();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.remaining(), 3);
        let root = &arena[StateId::ROOT];
        assert_eq!(root.children().count(), 0);
        assert_eq!(root.fail(), None);
        assert!(root.outputs().is_empty());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = StateArena::with_capacity(0).unwrap_err();
        assert!(matches!(err, Error::InvalidCapacity(0)));
    }

    #[test]
    fn allocates_sequential_ids_until_full() {
        let mut arena = StateArena::with_capacity(3).unwrap();
        assert_eq!(arena.alloc().unwrap(), StateId::from_index(1));
        assert_eq!(arena.alloc().unwrap(), StateId::from_index(2));
        assert_eq!(arena.remaining(), 0);
        let err = arena.alloc().unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { capacity: 3 }));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn arenas_count_independently() {
        let mut a = StateArena::with_capacity(8).unwrap();
        let mut b = StateArena::with_capacity(8).unwrap();
        a.alloc().unwrap();
        a.alloc().unwrap();
        assert_eq!(b.alloc().unwrap(), StateId::from_index(1));
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn large_capacity_reserves_lazily() {
        let mut arena = StateArena::with_capacity(1 << 30).unwrap();
        for _ in 0..PROGRESS_INTERVAL {
            arena.alloc().unwrap();
        }
        assert_eq!(arena.len(), PROGRESS_INTERVAL + 1);
        assert_eq!(arena.capacity(), 1 << 30);
    }
}
