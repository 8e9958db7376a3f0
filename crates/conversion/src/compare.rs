#![forbid(unsafe_code)]

use itertools::Itertools;

use finaut_automata::Acceptor;
use finaut_automata::Symbol;

/// Iterates over every word over the given alphabet of length at most
/// `max_length`, starting with the empty word.
pub fn words_up_to<S: Symbol>(alphabet: &[S], max_length: usize) -> impl Iterator<Item = Vec<S>> + '_ {
    std::iter::once(Vec::new()).chain((1..=max_length).flat_map(move |length| {
        std::iter::repeat_n(alphabet.iter().cloned(), length).multi_cartesian_product()
    }))
}

/// Returns true iff the two acceptors agree on every word over the given
/// alphabet of length at most `max_length`.
///
/// This is a bounded language comparison: it cannot prove equivalence in
/// general, but it is exact for the agreement properties stated over a fixed
/// word length.
pub fn agree_up_to<S: Symbol>(
    left: &impl Acceptor<S>,
    right: &impl Acceptor<S>,
    alphabet: &[S],
    max_length: usize,
) -> bool {
    words_up_to(alphabet, max_length).all(|word| left.accepts(&word) == right.accepts(&word))
}
