use std::ops::Index;

use crate::Float;

/// A fixed-size set of coordinates (or of values sampled on them).
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Vector<T, const DIMS: usize>([T; DIMS]);

impl<T, const DIMS: usize> Clone for Vector<T, DIMS>
where
    [T; DIMS]: Clone,
{
    fn clone(&self) -> Self {
        Vector(self.0.clone())
    }
}
impl<T, const DIMS: usize> Copy for Vector<T, DIMS> where [T; DIMS]: Copy {}

impl<T: Float, const DIMS: usize> Vector<T, DIMS> {
    /// `DIMS` evenly spaced points from `start` to `stop`, both ends included.
    ///
    /// A single point sits at `start`.
    pub fn linspace(start: T, stop: T) -> Self {
        if DIMS < 2 {
            return Self::broadcast(start);
        }

        let step = (stop - start) / T::from_count(DIMS - 1);
        Self::from_idx(|i| start + step * T::from_count(i))
    }

    /// The spacing between neighbouring points, assuming the [`Vector`] is an evenly spaced grid.
    pub fn spacing(&self) -> T {
        match self.0.as_slice() {
            [first, second, ..] => *second - *first,
            _ => T::zero(),
        }
    }
}

impl<T, const DIMS: usize> Vector<T, DIMS> {
    /// Wraps an array as a [`Vector`].
    pub fn new(data: [T; DIMS]) -> Vector<T, DIMS> {
        Self(data)
    }

    /// A [`Vector`] with every entry set to `value`.
    pub fn broadcast(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_idx(|_| value.clone())
    }

    /// Iterates over the entries by value.
    pub fn iter(self) -> impl Iterator<Item = T> {
        self.0.into_iter()
    }

    /// Applies `map_fn` to every entry.
    #[inline]
    pub fn map<U>(self, map_fn: impl Fn(T) -> U) -> Vector<U, DIMS> {
        Vector(self.0.map(map_fn))
    }

    /// Builds a [`Vector`] from its entries' indices.
    #[inline]
    pub fn from_idx(idx_fn: impl Fn(usize) -> T) -> Self {
        Self(std::array::from_fn(idx_fn))
    }
}

impl<T, const DIMS: usize> Index<usize> for Vector<T, DIMS> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
