#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod compare;
mod determinize;
mod eliminate;
mod minimize;
mod partition;

pub use compare::*;
pub use determinize::*;
pub use eliminate::*;
pub use minimize::*;
pub use partition::*;
