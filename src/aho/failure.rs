//! Failure-link construction.
//!
//! Runs once over a fully inserted trie. Root's missing edges become
//! self-loops, which makes root total; every other state then gets the
//! state for the longest proper suffix of its path that is also a trie
//! path, found by a breadth-first walk so that each failure target (which
//! is always shallower) is final before it is read.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::state::{Outputs, StateId, ALPHABET_SIZE};
use super::state_arena::StateArena;

/// Computes failure links and inherited outputs for every state in `arena`.
pub(crate) fn link(arena: &mut StateArena) {
    // Each entry carries the failure link already assigned to the state.
    let mut queue: VecDeque<(StateId, StateId)> = VecDeque::new();

    let root = StateId::ROOT;
    // Non-empty only when an empty pattern was inserted.
    let root_output = Outputs::from_slice(arena[root].outputs());
    for byte in 0..ALPHABET_SIZE {
        let byte = byte as u8;
        match arena[root].get(byte) {
            None => arena[root].set(byte, root),
            Some(child) => {
                arena[child].set_fail(root);
                arena[child].inherit(&root_output);
                queue.push_back((child, root));
            }
        }
    }

    while let Some((state, fail)) = queue.pop_front() {
        // Collect the edges before mutating the children.
        let children: SmallVec<[(u8, StateId); 8]> = arena[state].children().collect();
        for (byte, child) in children {
            let mut best = fail;
            let child_fail = loop {
                if let Some(next) = arena[best].get(byte) {
                    break next;
                }
                // Only root lacks a failure link, and root has every edge.
                best = arena[best].fail().unwrap_or(root);
            };
            arena[child].set_fail(child_fail);

            if !arena[child_fail].outputs().is_empty() {
                let inherited = Outputs::from_slice(arena[child_fail].outputs());
                arena[child].inherit(&inherited);
            }
            queue.push_back((child, child_fail));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aho::state::PatternId;

    /// Inserts `patterns` into a fresh arena, returning the end state of each.
    fn trie(patterns: &[&str]) -> (StateArena, Vec<StateId>) {
        let mut arena = StateArena::with_capacity(64).unwrap();
        let mut ends = Vec::new();
        for (i, pattern) in patterns.iter().enumerate() {
            let mut state = StateId::ROOT;
            for &byte in pattern.as_bytes() {
                state = match arena[state].get(byte) {
                    Some(next) => next,
                    None => {
                        let next = arena.alloc().unwrap();
                        arena[state].set(byte, next);
                        next
                    }
                };
            }
            arena[state].push_own(PatternId::new(i as u32));
            ends.push(state);
        }
        (arena, ends)
    }

    fn walk(arena: &StateArena, path: &str) -> StateId {
        path.bytes()
            .fold(StateId::ROOT, |s, b| arena[s].get(b).unwrap())
    }

    #[test]
    fn root_becomes_total() {
        let (mut arena, _) = trie(&["ab"]);
        link(&mut arena);
        let a = walk(&arena, "a");
        for byte in 0..=255u8 {
            let next = arena[StateId::ROOT].get(byte).unwrap();
            if byte == b'a' {
                assert_eq!(next, a);
            } else {
                assert_eq!(next, StateId::ROOT);
            }
        }
    }

    #[test]
    fn non_root_edges_are_untouched() {
        let (mut arena, _) = trie(&["ab"]);
        link(&mut arena);
        let a = walk(&arena, "a");
        assert_eq!(arena[a].children().count(), 1);
        assert_eq!(arena[a].get(b'x'), None);
    }

    #[test]
    fn failure_links_point_to_longest_suffix() {
        let (mut arena, _) = trie(&["he", "she", "his", "hers"]);
        link(&mut arena);
        let fail = |path: &str| arena[walk(&arena, path)].fail().unwrap();

        assert_eq!(fail("h"), StateId::ROOT);
        assert_eq!(fail("s"), StateId::ROOT);
        assert_eq!(fail("sh"), walk(&arena, "h"));
        assert_eq!(fail("she"), walk(&arena, "he"));
        assert_eq!(fail("his"), walk(&arena, "s"));
        assert_eq!(fail("hers"), walk(&arena, "s"));
        assert_eq!(fail("her"), StateId::ROOT);
    }

    #[test]
    fn outputs_are_inherited_after_own() {
        let (mut arena, ends) = trie(&["he", "she", "his", "hers"]);
        link(&mut arena);
        let she = ends[1];
        assert_eq!(arena[she].own_outputs(), [PatternId::new(1)]);
        assert_eq!(arena[she].outputs(), [PatternId::new(1), PatternId::new(0)]);
    }

    #[test]
    fn inheritance_is_transitive() {
        let (mut arena, ends) = trie(&["c", "bc", "abc"]);
        link(&mut arena);
        assert_eq!(arena[ends[2]].outputs(), [2, 1, 0].map(PatternId::new));
    }

    #[test]
    fn empty_trie_links_only_root() {
        let (mut arena, _) = trie(&[]);
        link(&mut arena);
        assert_eq!(arena.len(), 1);
        assert!(arena[StateId::ROOT].outputs().is_empty());
        assert_eq!(arena[StateId::ROOT].children().count(), ALPHABET_SIZE);
    }
}
