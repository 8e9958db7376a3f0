#![forbid(unsafe_code)]

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::Acceptor;
use crate::MalformedAutomaton;
use crate::StateIndex;
use crate::Symbol;

/// A nondeterministic finite automaton over symbols of type `S`.
///
/// Every (state, symbol) pair maps to a set of successor states, stored as a
/// sorted vector so that iteration over successors is deterministic. A
/// missing entry denotes the empty successor set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa<S: Eq + std::hash::Hash> {
    transitions: Vec<FxHashMap<S, Vec<StateIndex>>>,
    initial: StateIndex,
    finals: FxHashSet<StateIndex>,
}

impl<S: Symbol> Nfa<S> {
    /// Creates a nondeterministic automaton with `num_of_states` states and
    /// the given (from, symbol, to) transitions. Duplicate transitions are
    /// collapsed.
    ///
    /// Fails if the initial state, a transition endpoint, or a final state is
    /// not a state of the automaton.
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

        let mut table: Vec<FxHashMap<S, Vec<StateIndex>>> = vec![FxHashMap::default(); num_of_states];
        for (from, symbol, to) in transitions {
            if from.value() >= num_of_states || to.value() >= num_of_states {
                return Err(MalformedAutomaton::UnknownTransitionState {
                    from: from.value(),
                    symbol: symbol.to_string(),
                    to: to.value(),
                    num_of_states,
                });
            }

            table[from.value()].entry(symbol).or_default().push(to);
        }

        // Canonicalise the successor sets.
        for outgoing in &mut table {
            for successors in outgoing.values_mut() {
                successors.sort();
                successors.dedup();
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

        Ok(Nfa {
            transitions: table,
            initial,
            finals: final_states,
        })
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.transitions.len()
    }

    /// Returns the index of the initial state.
    pub fn initial_state(&self) -> StateIndex {
        self.initial
    }

    /// Returns true iff the given state is a final state.
    pub fn is_final(&self, state: StateIndex) -> bool {
        self.finals.contains(&state)
    }

    /// Returns the successor set for the given state and symbol, sorted by
    /// state index. The set is empty when no transition is defined.
    pub fn successors(&self, state: StateIndex, symbol: &S) -> &[StateIndex] {
        self.transitions[state.value()]
            .get(symbol)
            .map(|successors| successors.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the symbols labelling an outgoing transition of the given state.
    pub fn outgoing_symbols(&self, state: StateIndex) -> impl Iterator<Item = &S> + '_ {
        self.transitions[state.value()].keys()
    }

    /// Returns the outgoing transitions of the given state as (symbol,
    /// successor set) pairs.
    pub fn outgoing_transitions(&self, state: StateIndex) -> impl Iterator<Item = (&S, &[StateIndex])> + '_ {
        self.transitions[state.value()]
            .iter()
            .map(|(symbol, successors)| (symbol, successors.as_slice()))
    }

    /// Iterate over all states of the automaton.
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        (0..self.num_of_states()).map(StateIndex::new)
    }
}

impl<S: Symbol> Acceptor<S> for Nfa<S> {
    fn accepts(&self, word: &[S]) -> bool {
        let mut current: FxHashSet<StateIndex> = FxHashSet::default();
        current.insert(self.initial);

        for symbol in word {
            let mut next = FxHashSet::default();
            for &state in &current {
                next.extend(self.successors(state, symbol).iter().copied());
            }

            if next.is_empty() {
                // No state is reachable anymore, so no suffix can be accepted.
                return false;
            }

            current = next;
        }

        current.iter().any(|&state| self.is_final(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn word(input: &str) -> Vec<char> {
        input.chars().collect()
    }

    fn state(index: usize) -> StateIndex {
        StateIndex::new(index)
    }

    /// The automaton accepting words over {0,1} that contain "00" or "11".
    fn double_symbol_nfa() -> Nfa<char> {
        Nfa::new(
            4,
            [
                (state(0), '0', state(0)),
                (state(0), '0', state(1)),
                (state(0), '1', state(0)),
                (state(0), '1', state(2)),
                (state(1), '0', state(3)),
                (state(2), '1', state(3)),
                (state(3), '0', state(3)),
                (state(3), '1', state(3)),
            ],
            state(0),
            [state(3)],
        )
        .expect("the automaton is well-formed")
    }

    #[test]
    fn test_nfa_accepts_double_symbol() {
        let nfa = double_symbol_nfa();

        assert!(!nfa.accepts(&word("")));
        assert!(nfa.accepts(&word("00")));
        assert!(!nfa.accepts(&word("01")));
        assert!(!nfa.accepts(&word("010")));
        assert!(nfa.accepts(&word("0011")));
        assert!(nfa.accepts(&word("11")));
        assert!(nfa.accepts(&word("0100")));
        assert!(!nfa.accepts(&word("0101")));
    }

    #[test]
    fn test_nfa_rejects_on_empty_state_set() {
        // A single state with no transitions: any non-empty word empties the
        // current state set immediately.
        let nfa = Nfa::<char>::new(1, [], state(0), [state(0)]).expect("the automaton is well-formed");

        assert!(nfa.accepts(&word("")));
        assert!(!nfa.accepts(&word("0")));
        assert!(!nfa.accepts(&word("00")));
    }

    #[test]
    fn test_nfa_unknown_states() {
        assert_eq!(
            Nfa::<char>::new(1, [], state(1), []),
            Err(MalformedAutomaton::UnknownInitialState {
                initial: 1,
                num_of_states: 1
            })
        );

        assert_eq!(
            Nfa::new(1, [(state(0), 'a', state(1))], state(0), []),
            Err(MalformedAutomaton::UnknownTransitionState {
                from: 0,
                symbol: "a".to_string(),
                to: 1,
                num_of_states: 1
            })
        );

        assert_eq!(
            Nfa::<char>::new(1, [], state(0), [state(1)]),
            Err(MalformedAutomaton::UnknownFinalState {
                state: 1,
                num_of_states: 1
            })
        );
    }
}
