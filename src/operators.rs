//! Field operators.
//!
//! - `split`: cut a line into fields
//! - `select`: pick fields by rule
//! - `join`: write the picked fields as one output line

pub mod join;
pub mod select;
pub mod split;

pub use join::{DEFAULT_JOIN, Format, Joined, JsonArray};
pub use select::{Picked, Select, pick, pick_all};
pub use split::{DEFAULT_SEPARATORS, Fields, SeparatorSet, Tokenizer};
