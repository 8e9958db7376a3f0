#![forbid(unsafe_code)]

use log::debug;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use finaut_automata::Nfa;
use finaut_automata::NfaLambda;
use finaut_automata::StateIndex;
use finaut_automata::Symbol;

/// Eliminates the silent transitions of the given automaton, producing a
/// nondeterministic automaton over the same state set recognising the same
/// language.
///
/// For every state q and symbol a, the new successor set is the closure of
/// the union of the a-successors of every state in the closure of q. A state
/// becomes final when its closure contains a final state, which folds silent
/// paths to acceptance into direct finality. The state set and the initial
/// state are preserved exactly; only transitions and finality change.
pub fn eliminate_silent<S: Symbol>(nfa_lambda: &NfaLambda<S>) -> Nfa<S> {
    let mut transitions = Vec::new();
    let mut finals = Vec::new();

    for state in nfa_lambda.iter_states() {
        let closure = nfa_lambda.closure(state);

        if closure.iter().any(|&member| nfa_lambda.is_final(member)) {
            finals.push(state);
        }

        // The union of the a-successors over the closure, per symbol a.
        let mut successors_by_symbol: FxHashMap<&S, FxHashSet<StateIndex>> = FxHashMap::default();
        for &member in &closure {
            for (symbol, successors) in nfa_lambda.outgoing_transitions(member) {
                successors_by_symbol
                    .entry(symbol)
                    .or_default()
                    .extend(successors.iter().copied());
            }
        }

        for (symbol, successors) in successors_by_symbol {
            for target in nfa_lambda.closure_of_set(successors) {
                transitions.push((state, symbol.clone(), target));
            }
        }
    }

    debug!(
        "silent-edge elimination produced {} transition triples over {} states",
        transitions.len(),
        nfa_lambda.num_of_states()
    );

    Nfa::new(
        nfa_lambda.num_of_states(),
        transitions,
        nfa_lambda.initial_state(),
        finals,
    )
    .expect("silent-edge elimination preserves the state set")
}
