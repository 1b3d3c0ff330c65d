//! Polynomial operations

pub mod point;
pub mod point_sequence;
pub mod polynomial;

pub use polynomial::*;
