//! Polynomial in Finite Field.

use crate::modular::{Modular, ModularNumber};

/// Polynomial Expression.
///
/// Coefficients are stored from the constant term upwards, so `[a, b, c]` represents
/// `a + bx + cx^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Modular> {
    /// Coefficients of the polynomial.
    coefficients: Vec<ModularNumber<T>>,
}

impl<T: Modular> Polynomial<T> {
    /// Creates a new polynomial expression.
    pub fn new(coefficients: Vec<ModularNumber<T>>) -> Polynomial<T> {
        Polynomial { coefficients }
    }

    /// Add a coefficient to the polynomial.
    pub fn add_coefficient(&mut self, coefficient: ModularNumber<T>) {
        self.coefficients.push(coefficient);
    }

    /// Check if polynomial is empty.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Get coefficients.
    pub fn coefficients(&self) -> &[ModularNumber<T>] {
        &self.coefficients
    }

    /// Get the degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Get the constant term, which is zero for an empty polynomial.
    pub fn constant_term(&self) -> ModularNumber<T> {
        self.coefficients.first().cloned().unwrap_or_default()
    }

    /// Evaluates the polynomial at a given x using Horner's method.
    ///
    /// Evaluation starts at the highest degree coefficient and reduces after every step.
    pub fn eval(&self, x: &ModularNumber<T>) -> ModularNumber<T> {
        let mut eval = ModularNumber::zero();
        for coefficient in self.coefficients.iter().rev() {
            eval = eval * x + coefficient;
        }
        eval
    }
}
