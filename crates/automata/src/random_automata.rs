#![forbid(unsafe_code)]

use rand::Rng;

use crate::Dfa;
use crate::Nfa;
use crate::NfaLambda;
use crate::StateIndex;
use crate::Symbol;

/// Returns an alphabet of the first `num_of_symbols` generated symbols.
fn alphabet<S: Symbol>(num_of_symbols: usize) -> Vec<S> {
    (0..num_of_symbols).map(S::from_index).collect()
}

/// Generates a random deterministic automaton with the desired number of
/// states and symbols. Every (state, symbol) pair receives a transition with
/// probability `density`, so the transition function is partial.
pub fn random_dfa(rng: &mut impl Rng, num_of_states: usize, num_of_symbols: usize, density: f64) -> Dfa<char> {
    assert!(num_of_states > 0, "An automaton must have an initial state.");

    let alphabet: Vec<char> = alphabet(num_of_symbols);
    let mut transitions = Vec::new();

    for state in 0..num_of_states {
        for &symbol in &alphabet {
            if rng.random_bool(density) {
                let to = rng.random_range(0..num_of_states);
                transitions.push((StateIndex::new(state), symbol, StateIndex::new(to)));
            }
        }
    }

    Dfa::new(num_of_states, transitions, StateIndex::new(0), random_finals(rng, num_of_states))
        .expect("a generated automaton only references its own states")
}

/// Generates a random nondeterministic automaton where every state has at
/// most `outdegree` outgoing transitions.
pub fn random_nfa(rng: &mut impl Rng, num_of_states: usize, num_of_symbols: usize, outdegree: usize) -> Nfa<char> {
    assert!(num_of_states > 0, "An automaton must have an initial state.");

    let alphabet: Vec<char> = alphabet(num_of_symbols);
    let mut transitions = Vec::new();

    for state in 0..num_of_states {
        for _ in 0..rng.random_range(0..=outdegree) {
            let symbol = alphabet[rng.random_range(0..alphabet.len())];
            let to = rng.random_range(0..num_of_states);
            transitions.push((StateIndex::new(state), symbol, StateIndex::new(to)));
        }
    }

    Nfa::new(num_of_states, transitions, StateIndex::new(0), random_finals(rng, num_of_states))
        .expect("a generated automaton only references its own states")
}

/// Generates a random nondeterministic automaton with silent edges, where
/// every state has at most `outdegree` symbol transitions and at most
/// `silent_degree` silent transitions.
pub fn random_nfa_lambda(
    rng: &mut impl Rng,
    num_of_states: usize,
    num_of_symbols: usize,
    outdegree: usize,
    silent_degree: usize,
) -> NfaLambda<char> {
    assert!(num_of_states > 0, "An automaton must have an initial state.");

    let alphabet: Vec<char> = alphabet(num_of_symbols);
    let mut transitions = Vec::new();

    for state in 0..num_of_states {
        for _ in 0..rng.random_range(0..=outdegree) {
            let symbol = alphabet[rng.random_range(0..alphabet.len())];
            let to = rng.random_range(0..num_of_states);
            transitions.push((StateIndex::new(state), Some(symbol), StateIndex::new(to)));
        }

        for _ in 0..rng.random_range(0..=silent_degree) {
            let to = rng.random_range(0..num_of_states);
            transitions.push((StateIndex::new(state), None, StateIndex::new(to)));
        }
    }

    NfaLambda::new(num_of_states, transitions, StateIndex::new(0), random_finals(rng, num_of_states))
        .expect("a generated automaton only references its own states")
}

/// Marks every state final with probability a third.
fn random_finals(rng: &mut impl Rng, num_of_states: usize) -> Vec<StateIndex> {
    (0..num_of_states)
        .filter(|_| rng.random_bool(1.0 / 3.0))
        .map(StateIndex::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use finaut_utilities::random_test;

    #[test]
    fn test_random_automata_are_well_formed() {
        random_test(100, |rng| {
            // Construction checks the structural invariants internally.
            let _dfa = random_dfa(rng, 10, 3, 0.7);
            let _nfa = random_nfa(rng, 10, 3, 3);
            let _nfa_lambda = random_nfa_lambda(rng, 10, 3, 3, 2);
        });
    }
}
