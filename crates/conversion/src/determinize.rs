#![forbid(unsafe_code)]

use std::collections::VecDeque;

use log::debug;
use log::trace;
use rustc_hash::FxHashMap;

use finaut_automata::Dfa;
use finaut_automata::Nfa;
use finaut_automata::StateIndex;
use finaut_automata::Symbol;

/// Converts the given nondeterministic automaton into a deterministic one
/// recognising the same language, using the subset construction.
///
/// Composite states are the non-empty sets of original states discovered
/// breadth-first from the singleton {initial}; unreachable subsets are never
/// materialised. The empty successor set is not recorded as a state: a word
/// leading into it is rejected by the partial transition function instead,
/// and the same policy is applied for every symbol. A composite state is
/// final iff it contains an original final state.
///
/// Composite states are kept as canonical sorted vectors of original state
/// indices, so structurally equal sets collapse to the same discovered
/// identity, and symbols are explored in sorted order. Two runs on the same
/// input therefore discover the same composite states in the same order.
pub fn determinize<S: Symbol>(nfa: &Nfa<S>) -> Dfa<S> {
    let start = vec![nfa.initial_state()];

    let mut composite_index: FxHashMap<Vec<StateIndex>, StateIndex> = FxHashMap::default();
    composite_index.insert(start.clone(), StateIndex::new(0));

    let mut composites: Vec<Vec<StateIndex>> = vec![start];
    let mut queue: VecDeque<StateIndex> = VecDeque::from([StateIndex::new(0)]);
    let mut transitions: Vec<(StateIndex, S, StateIndex)> = Vec::new();
    let mut finals: Vec<StateIndex> = Vec::new();

    while let Some(current) = queue.pop_front() {
        let composite = composites[current.value()].clone();

        if composite.iter().any(|&member| nfa.is_final(member)) {
            finals.push(current);
        }

        // The symbols labelling an outgoing edge of any member.
        let mut symbols: Vec<&S> = composite
            .iter()
            .flat_map(|&member| nfa.outgoing_symbols(member))
            .collect();
        symbols.sort();
        symbols.dedup();

        for symbol in symbols {
            let mut successors: Vec<StateIndex> = composite
                .iter()
                .flat_map(|&member| nfa.successors(member, symbol).iter().copied())
                .collect();
            successors.sort();
            successors.dedup();

            debug_assert!(
                !successors.is_empty(),
                "a symbol is only considered when it labels an outgoing edge of a member"
            );

            let target = match composite_index.get(&successors) {
                Some(&index) => index,
                None => {
                    let index = StateIndex::new(composites.len());
                    composite_index.insert(successors.clone(), index);
                    composites.push(successors);
                    queue.push_back(index);
                    trace!("discovered composite state {index}");
                    index
                }
            };

            transitions.push((current, symbol.clone(), target));
        }
    }

    debug!(
        "subset construction discovered {} composite states for {} original states",
        composites.len(),
        nfa.num_of_states()
    );

    Dfa::new(composites.len(), transitions, StateIndex::new(0), finals)
        .expect("the subset construction produces a deterministic transition table")
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use finaut_automata::Acceptor;
    use finaut_automata::random_nfa;
    use finaut_utilities::random_test;

    use crate::agree_up_to;

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
    fn test_determinize_agrees_with_nfa() {
        let nfa = double_symbol_nfa();
        let dfa = determinize(&nfa);

        assert!(agree_up_to(&nfa, &dfa, &['0', '1'], 6));

        assert!(!dfa.accepts(&word("")));
        assert!(dfa.accepts(&word("00")));
        assert!(!dfa.accepts(&word("01")));
        assert!(!dfa.accepts(&word("010")));
        assert!(dfa.accepts(&word("0011")));
    }

    #[test]
    fn test_determinize_is_deterministic() {
        let nfa = double_symbol_nfa();

        // Two independent runs discover the same composite states in the
        // same order and therefore produce identical automata.
        assert_eq!(determinize(&nfa), determinize(&nfa));
    }

    #[test]
    fn test_determinize_only_reachable_subsets() {
        // A state that only loops on itself: the reachable subsets are
        // {initial} and nothing else, far below the full powerset.
        let nfa = Nfa::new(3, [(state(0), 'a', state(0))], state(0), [state(2)])
            .expect("the automaton is well-formed");

        let dfa = determinize(&nfa);
        assert_eq!(dfa.num_of_states(), 1);
    }

    #[test]
    fn test_random_determinize_preserves_language() {
        random_test(50, |rng| {
            let nfa = random_nfa(rng, 8, 3, 3);
            let dfa = determinize(&nfa);

            assert!(
                agree_up_to(&nfa, &dfa, &['0', '1', '2'], 5),
                "the subset construction must preserve the language"
            );
        });
    }
}
