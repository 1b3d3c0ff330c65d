//! ModularNumber Operations

use super::{Modular, Prime};
use crate::{errors::DivByZero, modular::ModularNumber};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<T: Modular> Sub<&ModularNumber<T>> for ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn sub(self, other: &ModularNumber<T>) -> ModularNumber<T> {
        (&self).sub(other)
    }
}

impl<T: Modular> Sub for &ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn sub(self, other: &ModularNumber<T>) -> ModularNumber<T> {
        // Both operands are already reduced so a single wrap around the modulo is enough.
        let value = if self.value >= other.value {
            &self.value - &other.value
        } else {
            T::modulo() - &other.value + &self.value
        };
        ModularNumber::from_reduced(value)
    }
}

impl<T: Modular> Add<&ModularNumber<T>> for ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn add(self, other: &ModularNumber<T>) -> ModularNumber<T> {
        (&self).add(other)
    }
}

impl<T: Modular> Add for &ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn add(self, other: &ModularNumber<T>) -> ModularNumber<T> {
        let value = &self.value + &other.value;
        let modulo = T::modulo();
        let value = if &value >= modulo { value - modulo } else { value };
        ModularNumber::from_reduced(value)
    }
}

impl<T: Modular> Mul<&ModularNumber<T>> for ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn mul(self, other: &ModularNumber<T>) -> ModularNumber<T> {
        (&self).mul(other)
    }
}

impl<T: Modular> Mul for &ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn mul(self, other: &ModularNumber<T>) -> ModularNumber<T> {
        let value = (&self.value * &other.value) % T::modulo();
        ModularNumber::from_reduced(value)
    }
}

impl<T: Prime> Div<&ModularNumber<T>> for ModularNumber<T> {
    type Output = Result<ModularNumber<T>, DivByZero>;

    fn div(self, other: &ModularNumber<T>) -> Result<ModularNumber<T>, DivByZero> {
        (&self).div(other)
    }
}

impl<T: Prime> Div for &ModularNumber<T> {
    type Output = Result<ModularNumber<T>, DivByZero>;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: &ModularNumber<T>) -> Result<ModularNumber<T>, DivByZero> {
        Ok(self * &other.inverse()?)
    }
}

impl<T: Modular> Neg for ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn neg(self) -> Self::Output {
        (&self).neg()
    }
}

impl<T: Modular> Neg for &ModularNumber<T> {
    type Output = ModularNumber<T>;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return ModularNumber::zero();
        }
        ModularNumber::from_reduced(T::modulo() - &self.value)
    }
}

impl<T: Prime> ModularNumber<T> {
    /// Computes the multiplicative inverse using the extended Euclidean algorithm.
    ///
    /// Zero has no inverse and yields [DivByZero].
    pub fn inverse(&self) -> Result<ModularNumber<T>, DivByZero> {
        if self.is_zero() {
            return Err(DivByZero);
        }
        let modulo = BigInt::from(T::modulo().clone());

        // Invariant: old_t * value == old_r (mod modulo), and the same for (t, r).
        let (mut old_r, mut r) = (modulo.clone(), BigInt::from(self.value.clone()));
        let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());
        while !r.is_zero() {
            let quotient = &old_r / &r;
            let next_r = &old_r - &quotient * &r;
            old_r = std::mem::replace(&mut r, next_r);
            let next_t = &old_t - &quotient * &t;
            old_t = std::mem::replace(&mut t, next_t);
        }
        // Only reachable with a modulo that is not actually prime.
        if !old_r.is_one() {
            return Err(DivByZero);
        }

        let inverse = ((old_t % &modulo) + &modulo) % &modulo;
        Ok(ModularNumber::from_reduced(inverse.magnitude().clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{modular::U256SharePrime, test_prime};
    use num_bigint::BigUint;
    use rstest::rstest;

    test_prime!(P11, 11u64);
    test_prime!(P13, 13u64);

    type Number = ModularNumber<P11>;

    #[rstest]
    #[case(3, 4, 7)]
    #[case(7, 4, 0)]
    #[case(10, 10, 9)]
    #[case(0, 0, 0)]
    fn addition(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
        assert_eq!(&Number::from_u32(a) + &Number::from_u32(b), Number::from_u32(expected));
    }

    #[rstest]
    #[case(7, 4, 3)]
    #[case(4, 7, 8)]
    #[case(0, 1, 10)]
    #[case(5, 5, 0)]
    fn subtraction(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
        assert_eq!(&Number::from_u32(a) - &Number::from_u32(b), Number::from_u32(expected));
    }

    #[rstest]
    #[case(3, 4, 1)]
    #[case(10, 10, 1)]
    #[case(0, 7, 0)]
    #[case(5, 6, 8)]
    fn multiplication(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
        assert_eq!(&Number::from_u32(a) * &Number::from_u32(b), Number::from_u32(expected));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 10)]
    #[case(10, 1)]
    fn negation(#[case] a: u32, #[case] expected: u32) {
        assert_eq!(-Number::from_u32(a), Number::from_u32(expected));
    }

    #[test]
    fn inverse_of_every_element() {
        for value in 1..13 {
            let value = ModularNumber::<P13>::from_u32(value);
            let inverse = value.inverse().expect("inverse failed");
            assert!((&value * &inverse).is_one(), "{value:?} * {inverse:?} != 1");
        }
    }

    #[test]
    fn inverse_of_zero() {
        assert_eq!(Number::zero().inverse(), Err(DivByZero));
        assert_eq!(Number::one() / &Number::zero(), Err(DivByZero));
    }

    #[test]
    fn division() {
        let result = (Number::from_u32(6) / &Number::from_u32(3)).unwrap();
        assert_eq!(result, Number::from_u32(2));
    }

    #[test]
    fn large_prime_arithmetic() {
        type Large = ModularNumber<U256SharePrime>;
        let maximum = Large::new(U256SharePrime::modulo().clone() - 1u32);

        // (p - 1) + 2 = 1
        assert!((&maximum + &Large::from_u32(2)).is_one());
        // (p - 1) * (p - 1) = (-1)^2 = 1
        assert!((&maximum * &maximum).is_one());
        // (p - 1) is its own inverse
        assert_eq!(maximum.inverse().unwrap(), maximum);
        assert_eq!(-Large::one(), maximum);
    }

    #[test]
    fn large_prime_inverse() {
        type Large = ModularNumber<U256SharePrime>;
        let value = Large::new(BigUint::from(0xdead_beef_u64) << 200u32);
        let inverse = value.inverse().unwrap();
        assert!((&value * &inverse).is_one());
    }
}
