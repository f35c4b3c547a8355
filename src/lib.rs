//! # libaho
//!
//! Construction of [Aho–Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! multi-pattern matching automatons over the full byte alphabet.
//!
//! Patterns are inserted into a trie that shares common prefixes. A single
//! breadth-first pass then computes failure links and lets every state
//! inherit the matches of its failure target, after which one linear scan
//! over the input reports every (overlapping) occurrence of every pattern.
//!
//! ## Features
//!
//! - **Byte patterns**: any byte may appear in a pattern, including `\0` and
//!   non-UTF-8 sequences
//! - **Bounded memory**: the state capacity is explicit, and running out of it
//!   is reported as an error instead of truncating patterns
//! - **Two-phase API**: [`Builder`](aho::Builder) is consumed by
//!   [`build`](aho::Builder::build), so a half-built automaton can never be scanned
//! - **Thread-safe**: a built [`Automaton`](aho::Automaton) is immutable and
//!   `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use libaho::aho::{build_automaton, Config};
//!
//! let automaton = build_automaton(&Config::new(64), ["he", "she", "his", "hers"]).unwrap();
//!
//! let found: Vec<(u32, usize)> = automaton
//!     .find_overlapping_iter(b"ushers")
//!     .map(|m| (m.pattern().as_u32(), m.last()))
//!     .collect();
//! assert_eq!(found, [(1, 3), (0, 3), (3, 5)]);
//! ```
//!
//! For explicit control over pattern identities, use the builder directly:
//!
//! ```
//! use libaho::aho::{Builder, PatternId};
//!
//! let mut builder = Builder::new(16).unwrap();
//! builder.add_pattern(b"\x00\xff", PatternId::new(42)).unwrap();
//! let automaton = builder.build();
//!
//! let m = automaton.find_overlapping_iter(b"\x01\x00\xff").next().unwrap();
//! assert_eq!(m.pattern(), PatternId::new(42));
//! assert_eq!(m.end(), 3);
//! ```
//!
//! ## Pattern Files
//!
//! [`PatternSource`](aho::PatternSource) reads a pattern count followed by
//! one pattern per line:
//!
//! ```
//! use libaho::aho::{Builder, PatternSource};
//!
//! let patterns = PatternSource::new(100).load(&b"2\nfoo\nbar\n"[..]).unwrap();
//! let mut builder = Builder::new(16).unwrap();
//! for pattern in &patterns {
//!     builder.insert(pattern).unwrap();
//! }
//! assert_eq!(builder.build().find_overlapping_iter(b"foobar").count(), 2);
//! ```

#![warn(missing_docs)]

/// Aho–Corasick automaton: states, builder, failure links and pattern loading.
pub mod aho;
