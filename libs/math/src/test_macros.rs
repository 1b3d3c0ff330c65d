//! Test macros.

/// Defines a small prime used for testing.
///
/// Small primes keep arithmetic and interpolation results easy to check by hand.
#[macro_export]
macro_rules! test_prime {
    ($name:ident, $value:literal) => {
        /// A prime number.
        #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        struct $name;

        impl $crate::modular::Modular for $name {
            fn modulo() -> &'static num_bigint::BigUint {
                static MODULO: once_cell::sync::Lazy<num_bigint::BigUint> =
                    once_cell::sync::Lazy::new(|| num_bigint::BigUint::from($value));
                &MODULO
            }
        }

        impl $crate::modular::Prime for $name {}
    };
}
