#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod automaton;
mod dfa;
mod error;
mod nfa;
mod nfa_lambda;
mod random_automata;

pub use automaton::*;
pub use dfa::*;
pub use error::*;
pub use nfa::*;
pub use nfa_lambda::*;
pub use random_automata::*;
