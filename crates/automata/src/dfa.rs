#![forbid(unsafe_code)]

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::Acceptor;
use crate::MalformedAutomaton;
use crate::StateIndex;
use crate::Symbol;

/// A deterministic finite automaton over symbols of type `S`.
///
/// States are the dense indices `0..num_of_states()`. The transition function
/// is partial: a missing (state, symbol) entry denotes no transition, and a
/// word that reaches such an entry is rejected. Determinism is enforced by
/// the shape of the table, which maps every (state, symbol) pair to at most
/// one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa<S: Eq + std::hash::Hash> {
    transitions: Vec<FxHashMap<S, StateIndex>>,
    initial: StateIndex,
    finals: FxHashSet<StateIndex>,
}

impl<S: Symbol> Dfa<S> {
    /// Creates a deterministic automaton with `num_of_states` states and the
    /// given (from, symbol, to) transitions.
    ///
    /// Fails if the initial state, a transition endpoint, or a final state is
    /// not a state of the automaton, or if the same (state, symbol) pair is
    /// mapped to two different targets. Repeating a transition with the same
    /// target is allowed and has no effect.
    pub fn new(
        num_of_states: usize,
        transitions: impl IntoIterator<Item = (StateIndex, S, StateIndex)>,
        initial: StateIndex,
        finals: impl IntoIterator<Item = StateIndex>,
    ) -> Result<Self, MalformedAutomaton> {
        if initial.value() >= num_of_states {
            return Err(MalformedAutomaton::UnknownInitialState {
                initial: initial.value(),
                num_of_states,
            });
        }

        let mut table: Vec<FxHashMap<S, StateIndex>> = vec![FxHashMap::default(); num_of_states];
        for (from, symbol, to) in transitions {
            if from.value() >= num_of_states || to.value() >= num_of_states {
                return Err(MalformedAutomaton::UnknownTransitionState {
                    from: from.value(),
                    symbol: symbol.to_string(),
                    to: to.value(),
                    num_of_states,
                });
            }

            if let Some(previous) = table[from.value()].insert(symbol.clone(), to) {
                if previous != to {
                    return Err(MalformedAutomaton::ConflictingTransition {
                        state: from.value(),
                        symbol: symbol.to_string(),
                    });
                }
            }
        }

        let mut final_states = FxHashSet::default();
        for state in finals {
            if state.value() >= num_of_states {
                return Err(MalformedAutomaton::UnknownFinalState {
                    state: state.value(),
                    num_of_states,
                });
            }
            final_states.insert(state);
        }

        Ok(Dfa {
            transitions: table,
            initial,
            finals: final_states,
        })
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.transitions.len()
    }

    /// Returns the number of transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.iter().map(|outgoing| outgoing.len()).sum()
    }

    /// Returns the index of the initial state.
    pub fn initial_state(&self) -> StateIndex {
        self.initial
    }

    /// Returns true iff the given state is a final state.
    pub fn is_final(&self, state: StateIndex) -> bool {
        self.finals.contains(&state)
    }

    /// Returns the target of the transition for the given state and symbol,
    /// or `None` if no such transition is defined.
    pub fn target(&self, state: StateIndex, symbol: &S) -> Option<StateIndex> {
        self.transitions[state.value()].get(symbol).copied()
    }

    /// Returns the outgoing transitions of the given state.
    pub fn outgoing_transitions(&self, state: StateIndex) -> impl Iterator<Item = (&S, StateIndex)> + '_ {
        self.transitions[state.value()].iter().map(|(symbol, &to)| (symbol, to))
    }

    /// Iterate over all states of the automaton.
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        (0..self.num_of_states()).map(StateIndex::new)
    }
}

impl<S: Symbol> Acceptor<S> for Dfa<S> {
    fn accepts(&self, word: &[S]) -> bool {
        let mut current = self.initial;

        for symbol in word {
            match self.target(current, symbol) {
                Some(next) => current = next,
                // No transition for this symbol, so no suffix can be accepted.
                None => return false,
            }
        }

        self.is_final(current)
    }
}
