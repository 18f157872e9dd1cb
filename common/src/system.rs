use crate::Float;

/// The description of a quantum system with a discrete spectrum.
pub trait QuantumSystem<S: Float> {
    /// The number of eigenvalues returned by [`QuantumSystem::eigenvals_default`].
    const DEFAULT_EVALS_COUNT: usize = 6;

    /// A label naming the kind of system, e.g. `"Oscillator"`.
    fn sys_type(&self) -> &'static str;

    /// The lowest `evals_count` eigenvalues in ascending order.
    fn eigenvals(&self, evals_count: usize) -> Vec<S>;

    /// The lowest [`QuantumSystem::DEFAULT_EVALS_COUNT`] eigenvalues in ascending order.
    fn eigenvals_default(&self) -> Vec<S> {
        self.eigenvals(Self::DEFAULT_EVALS_COUNT)
    }

    /// The dimension of the (truncated) Hilbert space, or [`None`] when no truncation was set.
    fn hilbertdim(&self) -> Option<usize>;
}
