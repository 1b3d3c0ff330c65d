//! Modular BigInts and its Operation

pub mod encoding;
pub mod modular;
pub mod modulos;
pub mod ops;
pub mod repr;

pub use modular::*;
pub use modulos::*;
pub use repr::*;
