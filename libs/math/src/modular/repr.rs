//! The underlying representation for a modular number.

use num_bigint::BigUint;
use std::{fmt::Debug, hash::Hash};

/// A type that defines the modulo used when performing modular arithmetic.
///
/// Implementors are zero sized marker types. The modulo itself is built once and shared by every
/// [ModularNumber](super::ModularNumber) that uses it, so picking a modulo is a matter of picking
/// a type rather than passing a value around.
pub trait Modular:
    Clone + Copy + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    /// The modulo to be used.
    fn modulo() -> &'static BigUint;

    /// The number of bytes needed to represent any value under this modulo.
    fn byte_len() -> usize {
        let bytes = Self::modulo().bits().div_ceil(8);
        usize::try_from(bytes).unwrap_or(usize::MAX)
    }
}

/// A marker trait for prime numbers.
///
/// This is obviously just a marker so it should be used with caution only when defining types that
/// represent prime numbers. Every non-zero element under a prime modulo has an inverse.
pub trait Prime: Modular {}
