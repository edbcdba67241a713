//! Transport-agnostic domain logic.

pub mod calc;

pub use calc::{CalcError, Operation};
