//! Data loading and validation for round rules.

pub mod load;

pub use load::*;
