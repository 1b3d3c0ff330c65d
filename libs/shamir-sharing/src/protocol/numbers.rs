//! Random field elements that are unique within a single split.

use crate::FieldElement;
use rand::{CryptoRng, RngCore};
use std::collections::HashSet;

/// The set of field elements already drawn during a split.
///
/// Zero is in the set from the start: it's the interpolation target so it can never be used as an
/// abscissa, and keeping it out of the coefficients means no drawn value is ever zero.
#[derive(Debug)]
pub struct UsedNumbers {
    numbers: HashSet<FieldElement>,
}

impl Default for UsedNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl UsedNumbers {
    /// Creates a set that only contains zero.
    pub fn new() -> Self {
        let mut numbers = HashSet::new();
        numbers.insert(FieldElement::zero());
        Self { numbers }
    }

    /// Draws uniformly random field elements until one that was not drawn before comes up, records
    /// it and returns it.
    pub fn draw_unique<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<FieldElement, rand::Error> {
        loop {
            let candidate = FieldElement::gen_random_with_rng(rng)?;
            if !self.numbers.contains(&candidate) {
                self.numbers.insert(candidate.clone());
                return Ok(candidate);
            }
        }
    }

    /// Checks whether a number has been drawn, zero is always considered drawn.
    pub fn contains(&self, number: &FieldElement) -> bool {
        self.numbers.contains(number)
    }

    /// The number of elements in the set, including zero.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Checks whether the set only contains zero.
    pub fn is_empty(&self) -> bool {
        self.numbers.len() <= 1
    }
}
