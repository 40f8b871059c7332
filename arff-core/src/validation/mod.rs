//! Text and resource validation for ARFF input
//!
//! This module contains the tokenizer, the quote-aware missing value
//! scanner and the resource ceilings. Pure functions, no I/O.

pub mod limits;
pub mod parsing;

pub use limits::ResourceLimits;
pub use parsing::{contains_missing_value, parse_float_prefix, split, trim};
