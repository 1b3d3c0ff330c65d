//! Shamir Secret Sharing Protocol

pub mod errors;
pub mod numbers;
pub mod protocol;

pub use errors::*;
pub use numbers::*;
pub use protocol::*;
