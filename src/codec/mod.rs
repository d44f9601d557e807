//! Flattened wire form
//!
//! Parameters travel as a single `key=value;key=value` string. Neither keys nor
//! values may contain `=` or `;` and there is no escaping. Decoding is lenient:
//! anything after the last complete entry is dropped, never reported.

pub mod parsing;
pub mod serialization;

#[cfg(test)]
mod tests;

pub use parsing::unflatten;
pub use serialization::flatten;
