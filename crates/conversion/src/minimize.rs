#![forbid(unsafe_code)]

use std::collections::VecDeque;

use bitvec::bitvec;
use log::debug;
use log::trace;
use rustc_hash::FxHashMap;

use finaut_automata::Dfa;
use finaut_automata::StateIndex;
use finaut_automata::Symbol;

use crate::BlockIndex;
use crate::IndexedPartition;
use crate::Partition;

/// Minimises the given deterministic automaton: discards unreachable states,
/// then merges reachable states that no word distinguishes. The result is
/// the unique (up to state renaming) minimal automaton recognising the same
/// language.
///
/// A deterministic automaton without a reachable final state recognises the
/// empty language; its minimal form is a single non-final state without
/// transitions, which is returned directly.
pub fn minimize<S: Symbol>(dfa: &Dfa<S>) -> Dfa<S> {
    let reachable = reachable_states(dfa);
    debug!("{} of {} states are reachable", reachable.len(), dfa.num_of_states());

    if !reachable.iter().any(|&state| dfa.is_final(state)) {
        return Dfa::new(1, [], StateIndex::new(0), [])
            .expect("the single state automaton is well-formed");
    }

    let partition = refine(dfa, &reachable);
    quotient(dfa, &reachable, &partition)
}

/// Returns the states reachable from the initial state by following defined
/// transitions, in ascending state order.
fn reachable_states<S: Symbol>(dfa: &Dfa<S>) -> Vec<StateIndex> {
    let mut visited = bitvec![0; dfa.num_of_states()];
    visited.set(dfa.initial_state().value(), true);

    let mut queue = VecDeque::from([dfa.initial_state()]);
    while let Some(state) = queue.pop_front() {
        for (_, to) in dfa.outgoing_transitions(state) {
            if !visited[to.value()] {
                visited.set(to.value(), true);
                queue.push_back(to);
            }
        }
    }

    visited.iter_ones().map(StateIndex::new).collect()
}

/// Partition refinement over the reachable states.
///
/// A state's signature is its finality together with the block that each of
/// its transitions leads to, per symbol in a fixed sorted alphabet order. An
/// undefined transition is an absent pair, so two states that disagree on
/// whether a symbol is defined never end up in the same block. Every round
/// refines the previous partition, so the fixed point is reached once the
/// number of blocks is stable.
fn refine<S: Symbol>(dfa: &Dfa<S>, reachable: &[StateIndex]) -> IndexedPartition {
    // The alphabet observed among reachable states, sorted so that
    // signatures are canonical.
    let mut alphabet: Vec<&S> = reachable
        .iter()
        .flat_map(|&state| dfa.outgoing_transitions(state).map(|(symbol, _)| symbol))
        .collect();
    alphabet.sort();
    alphabet.dedup();

    let mut partition = IndexedPartition::new(dfa.num_of_states());
    let mut num_of_blocks = 1;
    let mut iteration = 0usize;

    loop {
        let mut signature_to_block: FxHashMap<(bool, Vec<(usize, BlockIndex)>), BlockIndex> =
            FxHashMap::default();
        let mut next = IndexedPartition::new(dfa.num_of_states());

        for &state in reachable {
            let mut signature = Vec::new();
            for (position, &symbol) in alphabet.iter().enumerate() {
                if let Some(target) = dfa.target(state, symbol) {
                    signature.push((position, partition.block_number(target)));
                }
            }

            let fresh = BlockIndex::new(signature_to_block.len());
            let block = *signature_to_block
                .entry((dfa.is_final(state), signature))
                .or_insert(fresh);
            next.set_block(state, block);
        }

        iteration += 1;
        trace!("iteration {iteration} partition {next}");

        let stable = signature_to_block.len() == num_of_blocks;
        num_of_blocks = signature_to_block.len();
        partition = next;

        if stable {
            break;
        }

        debug_assert!(
            iteration <= dfa.num_of_states().max(2),
            "There can never be more splits than number of states, but at least two iterations for stability"
        );
    }

    debug!("refinement finished with {num_of_blocks} blocks after {iteration} iterations");
    partition
}

/// Returns a new automaton based on the given partition: each block becomes
/// one state, and the transitions of all states in a block are mapped to
/// block identities. States in one block agree on finality and on the block
/// their transitions lead to, an invariant maintained by the refinement.
fn quotient<S: Symbol>(dfa: &Dfa<S>, reachable: &[StateIndex], partition: &IndexedPartition) -> Dfa<S> {
    let mut transitions = Vec::new();
    let mut finals = Vec::new();

    for &state in reachable {
        let block = partition.block_number(state);
        debug_assert!(
            block.value() < partition.num_of_blocks(),
            "Quotienting assumes that the block numbers do not exceed the number of blocks"
        );

        if dfa.is_final(state) {
            finals.push(StateIndex::new(block.value()));
        }

        for (symbol, to) in dfa.outgoing_transitions(state) {
            transitions.push((
                StateIndex::new(block.value()),
                symbol.clone(),
                StateIndex::new(partition.block_number(to).value()),
            ));
        }
    }

    let initial = StateIndex::new(partition.block_number(dfa.initial_state()).value());
    Dfa::new(partition.num_of_blocks(), transitions, initial, finals)
        .expect("states in one block agree on their outgoing behaviour")
}
