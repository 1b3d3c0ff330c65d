//! The supported modulos.
//!
//! Shares produced under one modulo are not interoperable with any other one, so the production
//! code only ever uses [U256SharePrime].

use super::{Modular, Prime};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// The decimal representation of [U256SharePrime].
pub const SHARE_PRIME_STR: &str = "115792089237316195423570985008687907853269984665640564039457584007913129639747";

static SHARE_PRIME: Lazy<BigUint> = Lazy::new(|| (BigUint::from(1u32) << 256u32) - 189u32);

/// The largest prime that fits in 256 bits: `2^256 - 189`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256SharePrime;

impl Modular for U256SharePrime {
    fn modulo() -> &'static BigUint {
        &SHARE_PRIME
    }
}

impl Prime for U256SharePrime {}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn share_prime_value() {
        let expected = BigUint::from_str(SHARE_PRIME_STR).unwrap();
        assert_eq!(U256SharePrime::modulo(), &expected);
    }

    #[test]
    fn share_prime_width() {
        assert_eq!(U256SharePrime::modulo().bits(), 256);
        assert_eq!(U256SharePrime::byte_len(), 32);
    }
}
