#![forbid(unsafe_code)]

use thiserror::Error;

/// Raised when a structural invariant fails at construction time. This is the
/// only validation boundary: once constructed, an automaton is well-formed
/// for the remainder of its lifetime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedAutomaton {
    #[error("initial state {initial} is not one of the {num_of_states} states")]
    UnknownInitialState { initial: usize, num_of_states: usize },

    #[error("transition {from} --[{symbol}]-> {to} references a state that is not one of the {num_of_states} states")]
    UnknownTransitionState {
        from: usize,
        symbol: String,
        to: usize,
        num_of_states: usize,
    },

    #[error("final state {state} is not one of the {num_of_states} states")]
    UnknownFinalState { state: usize, num_of_states: usize },

    #[error("deterministic automaton has two different transitions for state {state} and symbol {symbol}")]
    ConflictingTransition { state: usize, symbol: String },
}
