//! Point Sequence.

use crate::{
    errors::InterpolationError,
    modular::{ModularNumber, Prime},
    polynomial::point::Point,
};
use std::collections::HashSet;

/// Point sequence.
#[derive(Clone, Debug)]
pub struct PointSequence<T: Prime> {
    points: Vec<Point<T>>,
}

impl<T: Prime> Default for PointSequence<T> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<T: Prime> From<Vec<Point<T>>> for PointSequence<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self { points }
    }
}

impl<T: Prime> PointSequence<T> {
    /// Get the points in the sequence.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Consume the point sequence and return the points in it.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }

    /// Check if points is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of points in the sequence.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks if there are any duplicated abscissas.
    pub fn has_duplicates(&self) -> bool {
        let mut x_set = HashSet::new();
        self.points.iter().any(|point| !x_set.insert(&point.x))
    }

    /// Add a point to the point sequence.
    pub fn push(&mut self, point: Point<T>) {
        self.points.push(point)
    }

    /// Lagrange interpolation for Point Sequence at Zero.
    ///
    /// Every point in the sequence takes part in the interpolation. If the points were generated
    /// by a polynomial of a higher degree than `len() - 1` the result is a well defined but
    /// unrelated value, there is no way to detect that from the points alone.
    pub fn lagrange_interpolate(&self) -> Result<ModularNumber<T>, InterpolationError> {
        if self.points.is_empty() {
            return Err(InterpolationError::EmptySequence);
        }
        if self.has_duplicates() {
            return Err(InterpolationError::DuplicateAbscissas);
        }

        let mut res = ModularNumber::zero();
        for (i, pi) in self.points.iter().enumerate() {
            let mut den = ModularNumber::one();
            let mut num = ModularNumber::one();
            for (j, pj) in self.points.iter().enumerate() {
                if j != i {
                    den = den * &(&pi.x - &pj.x);
                    num = num * &-&pj.x;
                }
            }
            res = res + &((num / &den)? * &pi.y);
        }
        Ok(res)
    }

    /// Get initial part of Point Sequence till count.
    pub fn take(&self, count: usize) -> PointSequence<T> {
        Self { points: self.points.iter().take(count).cloned().collect() }
    }
}
