#![forbid(
    missing_docs,
    clippy::missing_assert_message,
    clippy::missing_docs_in_private_items,
    clippy::missing_asserts_for_indexing,
    clippy::missing_panics_doc
)]
//! This crate defines the common scalar types, special functions, coordinate containers and the
//! quantum-system interface shared by the superconducting-qubit models.

/// Defines the [`Coordinates<T: Float>`](crate::coordinates::Coordinates) trait that lets
/// position-space functions broadcast elementwise over scalars and arrays.
pub mod coordinates;

/// Defines the [`SystemError`](crate::errors::SystemError) raised by the checked constructors
/// and evaluators.
pub mod errors;

/// Special functions that are not provided by [`num::Float`], namely the physicists' Hermite
/// polynomials.
pub mod special;

/// Defines the trait type for a [`QuantumSystem<T: Float>`](crate::system::QuantumSystem).
pub mod system;

/// Defines the [`Copy`] coordinate grid [`Vector<T, const DIMS: usize>`](crate::vector::Vector)
/// that wraps the array type.
pub mod vector;

/// This trait defines the set of floats that have nice computer properties.
pub trait Float:
    num::Float
    + num::traits::FloatConst
    + bytemuck::Pod
    + Send
    + Sync
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// The natural logarithm of the Gamma function, $\ln|\Gamma(x)|$.
    fn ln_gamma(self) -> Self;

    /// Converts a count (a quantum number or a level index) into the float type.
    fn from_count(n: usize) -> Self;
}

impl Float for f32 {
    fn ln_gamma(self) -> Self {
        libm::lgammaf(self)
    }

    fn from_count(n: usize) -> Self {
        n as f32
    }
}

impl Float for f64 {
    fn ln_gamma(self) -> Self {
        libm::lgamma(self)
    }

    fn from_count(n: usize) -> Self {
        n as f64
    }
}
