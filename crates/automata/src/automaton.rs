#![forbid(unsafe_code)]

//! The shared traits and index types for all automaton kinds.

use std::fmt;
use std::hash::Hash;

use finaut_utilities::TagIndex;

/// A unique type for the states.
pub struct StateTag;

/// The index for a state.
///
/// States are opaque: all automaton-specific data (finality, transitions) is
/// attached by the automaton that owns them.
pub type StateIndex = TagIndex<usize, StateTag>;

/// A common trait for alphabet symbols. The algorithms on automata require
/// that symbols are orderable, comparable, and hashable, so we require that
/// here instead of specifying these bounds on usage.
pub trait Symbol: Ord + Hash + Eq + Clone + fmt::Debug + fmt::Display {
    /// Used for generating symbols for the random automata.
    fn from_index(i: usize) -> Self;
}

impl Symbol for char {
    fn from_index(i: usize) -> Self {
        char::from_digit((i % 36) as u32, 36).expect("radix is 36, so the digit is always valid")
    }
}

/// The shared capability of the three automaton kinds: evaluating acceptance
/// of a finite word of symbols.
///
/// Acceptance is a pure query. The empty word is legal and denotes the empty
/// input sequence. A symbol for which no transition is defined is treated as
/// "no transition" and leads to rejection, for every automaton kind.
pub trait Acceptor<S: Symbol> {
    /// Returns true iff the automaton accepts the given word.
    fn accepts(&self, word: &[S]) -> bool;
}
