//! Roman numeral converter
//!
//! Converts Roman numeral strings into their Arabic (integer) values,
//! rejecting strings that are not well-formed numerals.
//!
//! This library provides:
//! - Format validation (character class + forbidden substrings)
//! - Greedy decoding over an ordered symbol table
//! - A single [`convert`] entry point composing the two

pub mod convert;
pub mod decode;
pub mod error;
pub mod symbol;
pub mod validation;

// Re-exports for clean public API
pub use convert::convert;
pub use decode::decode;
pub use error::FormatError;
pub use symbol::SYMBOLS;
pub use validation::{validate, FORBIDDEN_PATTERNS};
