//! Fixed width byte encoding for modular numbers.

use super::{Modular, ModularNumber};
use crate::errors::Overflow;
use num_bigint::BigUint;

impl<T: Modular> ModularNumber<T> {
    /// Encode this number as big endian bytes, left padded with zeros to [Modular::byte_len].
    ///
    /// Every value under the same modulo is encoded into the same number of bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let raw = self.value.to_bytes_be();
        let mut bytes = vec![0u8; T::byte_len().saturating_sub(raw.len())];
        bytes.extend(raw);
        bytes
    }

    /// Decode a number from its big endian bytes.
    ///
    /// Values that are not below the modulo are rejected rather than reduced.
    pub fn try_from_be_bytes(bytes: &[u8]) -> Result<Self, Overflow> {
        ModularNumber::try_from(&BigUint::from_bytes_be(bytes))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modular::U256SharePrime;
    use rstest::rstest;

    type Number = ModularNumber<U256SharePrime>;

    #[rstest]
    #[case::zero(Number::zero())]
    #[case::one(Number::one())]
    #[case::maximum(-Number::one())]
    #[case::middle(Number::new(BigUint::from(u128::MAX) << 64u32))]
    fn fixed_width(#[case] number: Number) {
        let bytes = number.to_be_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(Number::try_from_be_bytes(&bytes).unwrap(), number);
    }

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(Number::zero().to_be_bytes(), vec![0; 32]);
    }

    #[test]
    fn non_canonical_bytes() {
        assert_eq!(Number::try_from_be_bytes(&[0xff; 32]), Err(Overflow));
    }
}
