use crate::{vector::Vector, Float};

/// A set of real coordinates that a position-space function can be evaluated on.
///
/// Evaluation is elementwise and the result has the same shape as the input: a scalar maps to a
/// scalar, an array to an array of the same length, and so on.
pub trait Coordinates<S: Float> {
    /// The container holding one result per coordinate.
    type Output;

    /// Applies `map_fn` to every coordinate, preserving the shape.
    fn map_coordinates(&self, map_fn: impl Fn(S) -> S) -> Self::Output;

    /// The number of coordinates.
    fn count(&self) -> usize;
}

impl<S: Float> Coordinates<S> for S {
    type Output = S;

    fn map_coordinates(&self, map_fn: impl Fn(S) -> S) -> S {
        map_fn(*self)
    }

    fn count(&self) -> usize {
        1
    }
}

impl<S: Float, const DIMS: usize> Coordinates<S> for [S; DIMS] {
    type Output = [S; DIMS];

    fn map_coordinates(&self, map_fn: impl Fn(S) -> S) -> [S; DIMS] {
        (*self).map(map_fn)
    }

    fn count(&self) -> usize {
        DIMS
    }
}

impl<S: Float> Coordinates<S> for [S] {
    type Output = Vec<S>;

    fn map_coordinates(&self, map_fn: impl Fn(S) -> S) -> Vec<S> {
        self.iter().copied().map(map_fn).collect()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<S: Float> Coordinates<S> for Vec<S> {
    type Output = Vec<S>;

    fn map_coordinates(&self, map_fn: impl Fn(S) -> S) -> Vec<S> {
        self.as_slice().map_coordinates(map_fn)
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<S: Float, const DIMS: usize> Coordinates<S> for Vector<S, DIMS> {
    type Output = Vector<S, DIMS>;

    fn map_coordinates(&self, map_fn: impl Fn(S) -> S) -> Vector<S, DIMS> {
        (*self).map(map_fn)
    }

    fn count(&self) -> usize {
        DIMS
    }
}
