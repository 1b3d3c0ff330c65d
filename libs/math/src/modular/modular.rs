//! Modular Big Integers

use super::Modular;
use crate::errors::Overflow;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use std::{
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
    str::FromStr,
};

/// A number that performs modular arithmetic in every operation.
///
/// `ModularNumber<T>` allows modular arithmetic on the modulo provided by its generic type `T`.
/// The inner value is arbitrary precision and always kept reduced, that is in the range
/// `[0, T::modulo())`.
///
/// # Examples
///
/// ```
/// use math_lib::modular::{ModularNumber, U256SharePrime};
///
/// let two = ModularNumber::<U256SharePrime>::from_u32(2);
/// let three = &two + &ModularNumber::one();
/// let six = &three * &two;
///
/// assert_eq!(six, ModularNumber::from_u32(6));
/// ```
///
/// # num_bigint conversions
///
/// [ModularNumber] can be converted to/from [num_bigint::BigUint]. Conversions into a modular
/// number only succeed for canonical values, that is values strictly below the modulo:
///
/// ```
/// use math_lib::modular::{ModularNumber, U256SharePrime};
/// use num_bigint::BigUint;
///
/// # fn test() -> anyhow::Result<()> {
/// let forty_two = BigUint::from(42u32);
/// let forty_two_modular = ModularNumber::<U256SharePrime>::try_from(&forty_two)?;
/// assert_eq!(BigUint::from(&forty_two_modular), forty_two);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModularNumber<T: Modular> {
    pub(crate) value: BigUint,
    modulo: PhantomData<T>,
}

impl<T: Modular> ModularNumber<T> {
    /// Constructs a new modular number, reducing the value if needed.
    ///
    /// For conversions that must reject non-canonical values use the `TryFrom<&BigUint>` impl.
    pub fn new(value: BigUint) -> Self {
        let modulo = T::modulo();
        let value = if &value >= modulo { value % modulo } else { value };
        Self::from_reduced(value)
    }

    // The caller guarantees `value < T::modulo()`.
    pub(crate) fn from_reduced(value: BigUint) -> Self {
        Self { value, modulo: PhantomData }
    }

    /// The zero value.
    pub fn zero() -> Self {
        Self::from_reduced(BigUint::zero())
    }

    /// The value one.
    pub fn one() -> Self {
        Self::new(BigUint::one())
    }

    /// Constructs a modular number from a u32.
    pub fn from_u32(value: u32) -> Self {
        Self::new(BigUint::from(value))
    }

    /// Constructs a modular number from a u64.
    pub fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }

    /// Generates a random modular number using the operating system's random number generator.
    pub fn gen_random() -> Result<Self, rand::Error> {
        Self::gen_random_with_rng(&mut OsRng)
    }

    /// Generates a random number uniformly distributed in `[0, modulo)` using the provided
    /// cryptographically secure random number generator.
    ///
    /// Failures of the random number generator are surfaced rather than retried with a weaker
    /// source.
    pub fn gen_random_with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, rand::Error> {
        let modulo = T::modulo();
        let byte_len = T::byte_len();
        let mut bytes = vec![0u8; byte_len];
        // Bits above the modulo's bit length are cleared, so every draw is accepted with
        // probability above one half. Rejection sampling keeps the result uniform.
        let excess_bits = (byte_len as u64).saturating_mul(8).saturating_sub(modulo.bits());
        let mask = u32::try_from(excess_bits).ok().and_then(|bits| u8::MAX.checked_shr(bits)).unwrap_or(u8::MAX);
        loop {
            rng.try_fill_bytes(&mut bytes)?;
            if let Some(first) = bytes.first_mut() {
                *first &= mask;
            }
            let value = BigUint::from_bytes_be(&bytes);
            if &value < modulo {
                return Ok(Self::from_reduced(value));
            }
        }
    }

    /// Check if this modular number is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if this modular number is one.
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Get a reference to the inner value.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Consume the modular number and return the inner value.
    pub fn into_value(self) -> BigUint {
        self.value
    }
}

impl<T: Modular> Default for ModularNumber<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Modular> From<&ModularNumber<T>> for BigUint {
    fn from(value: &ModularNumber<T>) -> Self {
        value.value.clone()
    }
}

impl<T: Modular> TryFrom<&BigUint> for ModularNumber<T> {
    type Error = Overflow;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        if value >= T::modulo() {
            return Err(Overflow);
        }
        Ok(Self::from_reduced(value.clone()))
    }
}

// String conversions.

impl<T: Modular> Debug for ModularNumber<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mod {}", self.value, T::modulo())
    }
}

impl<T: Modular> Display for ModularNumber<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An error when parsing a modular number.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input value contained invalid digits.
    #[error("invalid digits")]
    InvalidDigits,

    /// The input value is not below the modulo.
    #[error("value is too large")]
    Overflow,
}

impl<T: Modular> FromStr for ModularNumber<T> {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parsed = BigUint::from_str(input).map_err(|_| ParseError::InvalidDigits)?;
        ModularNumber::try_from(&parsed).map_err(|_| ParseError::Overflow)
    }
}
