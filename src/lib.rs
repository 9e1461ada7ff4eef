//! Line-oriented field extraction.
//!
//! Lines are split on a separator set, fields are picked by rules such as
//! `2`, `-1`, `2:5`, `:3` or `4:2` (descending ranges come out reversed),
//! and the picked fields are joined into one output line per input line.

pub mod ast;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod operators;
pub mod parser;
