#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod regular_expression;

pub use regular_expression::*;
