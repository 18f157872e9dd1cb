#![forbid(
    missing_docs,
    clippy::missing_assert_message,
    clippy::missing_docs_in_private_items,
    clippy::missing_asserts_for_indexing,
    clippy::missing_panics_doc
)]
//! Defines the harmonic oscillator model: the position-space eigenfunctions and the
//! [`Oscillator`](crate::system::Oscillator) mode of an oscillator or resonator.

/// Evaluates the normalized position-space eigenfunctions of the harmonic oscillator.
pub mod wavefunction;

/// Contains the [`Oscillator<T: Float>`](crate::system::Oscillator) implementation of
/// [`QuantumSystem<T: Float>`](common::system::QuantumSystem) and its builder.
pub mod system;
