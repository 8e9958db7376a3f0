#![forbid(unsafe_code)]

use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::Acceptor;
use crate::MalformedAutomaton;
use crate::StateIndex;
use crate::Symbol;

/// A nondeterministic finite automaton with silent transitions over symbols
/// of type `S`.
///
/// Silent (λ) edges consume no input. They are stored separately from the
/// symbol transitions so that the closure computation only traverses the
/// silent subgraph. In the construction input a silent edge is a transition
/// labelled `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaLambda<S: Eq + std::hash::Hash> {
    transitions: Vec<FxHashMap<S, Vec<StateIndex>>>,
    silent: Vec<Vec<StateIndex>>,
    initial: StateIndex,
    finals: FxHashSet<StateIndex>,
}

impl<S: Symbol> NfaLambda<S> {
    /// Creates an automaton with `num_of_states` states and the given
    /// (from, label, to) transitions, where a `None` label denotes a silent
    /// edge. Duplicate transitions are collapsed.
    ///
    /// Fails if the initial state, a transition endpoint, or a final state is
    /// not a state of the automaton.
    pub fn new(
        num_of_states: usize,
        transitions: impl IntoIterator<Item = (StateIndex, Option<S>, StateIndex)>,
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
        let mut silent: Vec<Vec<StateIndex>> = vec![Vec::new(); num_of_states];
        for (from, label, to) in transitions {
            if from.value() >= num_of_states || to.value() >= num_of_states {
                return Err(MalformedAutomaton::UnknownTransitionState {
                    from: from.value(),
                    symbol: label.map_or("λ".to_string(), |symbol| symbol.to_string()),
                    to: to.value(),
                    num_of_states,
                });
            }

            match label {
                Some(symbol) => table[from.value()].entry(symbol).or_default().push(to),
                None => silent[from.value()].push(to),
            }
        }

        // Canonicalise the successor sets.
        for outgoing in &mut table {
            for successors in outgoing.values_mut() {
                successors.sort();
                successors.dedup();
            }
        }
        for successors in &mut silent {
            successors.sort();
            successors.dedup();
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

        Ok(NfaLambda {
            transitions: table,
            silent,
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

    /// Returns the successor set for the given state and (non-silent) symbol.
    pub fn successors(&self, state: StateIndex, symbol: &S) -> &[StateIndex] {
        self.transitions[state.value()]
            .get(symbol)
            .map(|successors| successors.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the silent successors of the given state.
    pub fn silent_successors(&self, state: StateIndex) -> &[StateIndex] {
        &self.silent[state.value()]
    }

    /// Returns the outgoing non-silent transitions of the given state as
    /// (symbol, successor set) pairs.
    pub fn outgoing_transitions(&self, state: StateIndex) -> impl Iterator<Item = (&S, &[StateIndex])> + '_ {
        self.transitions[state.value()]
            .iter()
            .map(|(symbol, successors)| (symbol, successors.as_slice()))
    }

    /// Iterate over all states of the automaton.
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        (0..self.num_of_states()).map(StateIndex::new)
    }

    /// Returns the set of states reachable from the given state using only
    /// silent edges, including the state itself.
    pub fn closure(&self, state: StateIndex) -> FxHashSet<StateIndex> {
        self.closure_of_set([state])
    }

    /// Returns the union of the closures of the given states. Computed as a
    /// single breadth-first traversal of the silent subgraph seeded with all
    /// the given states; each state is visited at most once.
    pub fn closure_of_set(&self, states: impl IntoIterator<Item = StateIndex>) -> FxHashSet<StateIndex> {
        let mut visited: FxHashSet<StateIndex> = states.into_iter().collect();
        let mut queue: VecDeque<StateIndex> = visited.iter().copied().collect();

        while let Some(state) = queue.pop_front() {
            for &next in self.silent_successors(state) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        trace!("closure contains {} states", visited.len());
        visited
    }
}

impl<S: Symbol> Acceptor<S> for NfaLambda<S> {
    fn accepts(&self, word: &[S]) -> bool {
        // Finality of the empty word is checked against the closure of the
        // initial state, not the initial state alone.
        let mut current = self.closure(self.initial);

        for symbol in word {
            let mut stepped = FxHashSet::default();
            for &state in &current {
                stepped.extend(self.successors(state, symbol).iter().copied());
            }

            if stepped.is_empty() {
                // No state is reachable anymore, so no suffix can be accepted.
                return false;
            }

            current = self.closure_of_set(stepped);
        }

        current.iter().any(|&state| self.is_final(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use finaut_utilities::random_test;

    use crate::random_nfa_lambda;

    fn word(input: &str) -> Vec<char> {
        input.chars().collect()
    }

    fn state(index: usize) -> StateIndex {
        StateIndex::new(index)
    }

    /// The automaton recognising 0*1*2* through silent edges between the
    /// three phases.
    fn ordered_digits_nfa_lambda() -> NfaLambda<char> {
        NfaLambda::new(
            3,
            [
                (state(0), Some('0'), state(0)),
                (state(0), None, state(1)),
                (state(1), Some('1'), state(1)),
                (state(1), None, state(2)),
                (state(2), Some('2'), state(2)),
            ],
            state(0),
            [state(2)],
        )
        .expect("the automaton is well-formed")
    }

    #[test]
    fn test_nfa_lambda_accepts_ordered_digits() {
        let nfa_lambda = ordered_digits_nfa_lambda();

        assert!(nfa_lambda.accepts(&word("")));
        assert!(nfa_lambda.accepts(&word("0011222")));
        assert!(nfa_lambda.accepts(&word("0012")));
        assert!(nfa_lambda.accepts(&word("012")));
        assert!(nfa_lambda.accepts(&word("2")));

        // Out of order digits empty the state set.
        assert!(!nfa_lambda.accepts(&word("0102")));
        assert!(!nfa_lambda.accepts(&word("10")));
        assert!(!nfa_lambda.accepts(&word("21")));
        assert!(!nfa_lambda.accepts(&word("0120")));
    }

    #[test]
    fn test_closure_includes_silent_paths() {
        let nfa_lambda = ordered_digits_nfa_lambda();

        let closure = nfa_lambda.closure(state(0));
        assert_eq!(closure.len(), 3);
        assert!(closure.contains(&state(0)));
        assert!(closure.contains(&state(1)));
        assert!(closure.contains(&state(2)));

        let closure = nfa_lambda.closure(state(2));
        assert_eq!(closure.len(), 1);
    }

    #[test]
    fn test_closure_handles_silent_cycles() {
        // Two states in a silent cycle must not loop the traversal.
        let nfa_lambda = NfaLambda::<char>::new(
            2,
            [(state(0), None, state(1)), (state(1), None, state(0))],
            state(0),
            [state(1)],
        )
        .expect("the automaton is well-formed");

        let closure = nfa_lambda.closure(state(0));
        assert_eq!(closure.len(), 2);
        assert!(nfa_lambda.accepts(&word("")));
    }

    #[test]
    fn test_nfa_lambda_unknown_states() {
        assert_eq!(
            NfaLambda::<char>::new(1, [], state(1), []),
            Err(MalformedAutomaton::UnknownInitialState {
                initial: 1,
                num_of_states: 1
            })
        );

        assert_eq!(
            NfaLambda::new(1, [(state(0), Some('a'), state(1))], state(0), []),
            Err(MalformedAutomaton::UnknownTransitionState {
                from: 0,
                symbol: "a".to_string(),
                to: 1,
                num_of_states: 1
            })
        );

        // A silent edge out of range renders its label as λ.
        assert_eq!(
            NfaLambda::<char>::new(1, [(state(0), None, state(1))], state(0), []),
            Err(MalformedAutomaton::UnknownTransitionState {
                from: 0,
                symbol: "λ".to_string(),
                to: 1,
                num_of_states: 1
            })
        );

        assert_eq!(
            NfaLambda::<char>::new(1, [], state(0), [state(1)]),
            Err(MalformedAutomaton::UnknownFinalState {
                state: 1,
                num_of_states: 1
            })
        );
    }

    #[test]
    fn test_random_closure_idempotent_and_monotone() {
        random_test(100, |rng| {
            let nfa_lambda = random_nfa_lambda(rng, 10, 3, 3, 2);

            for state in nfa_lambda.iter_states() {
                let closure = nfa_lambda.closure(state);
                assert!(closure.contains(&state), "closure contains the state itself");

                let twice = nfa_lambda.closure_of_set(closure.iter().copied());
                assert_eq!(closure, twice, "closure is idempotent");
            }
        });
    }
}
