//! Point
use crate::modular::{Modular, ModularNumber};
use std::fmt::Debug;

/// A point `(x, y)` where `y` is a polynomial evaluated at `x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Point<T: Modular> {
    pub(crate) x: ModularNumber<T>,
    pub(crate) y: ModularNumber<T>,
}

impl<T: Modular> Point<T> {
    /// Creates a new point.
    pub fn new(x: ModularNumber<T>, y: ModularNumber<T>) -> Point<T> {
        Point { x, y }
    }

    /// The abscissa.
    pub fn x(&self) -> &ModularNumber<T> {
        &self.x
    }

    /// The ordinate.
    pub fn y(&self) -> &ModularNumber<T> {
        &self.y
    }

    /// Consumes the point and returns the (x, y) coordinates in it.
    pub fn into_coordinates(self) -> (ModularNumber<T>, ModularNumber<T>) {
        (self.x, self.y)
    }
}

impl<T: Modular> Debug for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Point").field("x", &self.x).field("y", &self.y).finish()
    }
}
