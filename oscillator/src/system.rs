use std::fmt;

use common::{errors::SystemError, system::QuantumSystem, Float};

/// A single mode of an oscillator or resonator.
///
/// The spectrum is the equally spaced ladder
/// $$ E_n = \omega n, \quad n = 0, 1, 2, \ldots, $$
/// measured from the ground state, i.e. without the zero-point offset $\omega/2$.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator<T: Float> {
    /// The angular frequency of the mode.
    omega: T,
    /// The number of basis states kept when the mode is represented in a finite basis.
    truncated_dim: Option<usize>,
}

impl<T: Float> Oscillator<T> {
    /// Creates an [`Oscillator`], storing the parameters as given.
    pub fn new(omega: T, truncated_dim: Option<usize>) -> Self {
        log::trace!("creating oscillator with omega = {omega}, truncated_dim = {truncated_dim:?}");

        Self {
            omega,
            truncated_dim,
        }
    }

    /// Creates an [`Oscillator`] after checking that `omega` is positive and finite and that
    /// `truncated_dim`, when given, is non-zero.
    pub fn try_new(omega: T, truncated_dim: Option<usize>) -> Result<Self, SystemError> {
        let omega = SystemError::check_positive(omega, SystemError::InvalidFrequency)?;

        if truncated_dim == Some(0) {
            return SystemError::reject(SystemError::ZeroDimension);
        }

        Ok(Self::new(omega, truncated_dim))
    }

    /// Starts building a validated [`Oscillator`].
    pub fn build() -> OscillatorBuilder<T> {
        OscillatorBuilder {
            omega: None,
            truncated_dim: None,
        }
    }

    /// The angular frequency of the mode.
    pub fn omega(&self) -> T {
        self.omega
    }

    /// The truncated Hilbert-space dimension, if one was set.
    pub fn truncated_dim(&self) -> Option<usize> {
        self.truncated_dim
    }
}

impl<T: Float> QuantumSystem<T> for Oscillator<T> {
    fn sys_type(&self) -> &'static str {
        "Oscillator"
    }

    fn eigenvals(&self, evals_count: usize) -> Vec<T> {
        log::trace!("computing {evals_count} eigenvalue(s) of {self}");

        (0..evals_count)
            .map(|n| self.omega * T::from_count(n))
            .collect()
    }

    fn hilbertdim(&self) -> Option<usize> {
        self.truncated_dim
    }
}

impl<T: Float> fmt::Display for Oscillator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(omega={}, truncated_dim=", self.sys_type(), self.omega)?;
        match self.truncated_dim {
            Some(dim) => write!(f, "{dim})"),
            None => write!(f, "None)"),
        }
    }
}

/// Builder for a validated [`Oscillator`], see [`Oscillator::build`].
#[derive(Debug, Clone, Copy)]
pub struct OscillatorBuilder<T: Float> {
    /// The angular frequency, required.
    omega: Option<T>,
    /// The truncated Hilbert-space dimension, optional.
    truncated_dim: Option<usize>,
}

impl<T: Float> OscillatorBuilder<T> {
    /// Sets the angular frequency.
    pub fn omega(mut self, omega: T) -> Self {
        self.omega.replace(omega);

        self
    }

    /// Sets the truncated Hilbert-space dimension.
    pub fn truncated_dim(mut self, truncated_dim: usize) -> Self {
        self.truncated_dim.replace(truncated_dim);

        self
    }

    /// Validates the parameters and creates the [`Oscillator`].
    pub fn finalize(self) -> Result<Oscillator<T>, SystemError> {
        let omega = self.omega.ok_or(SystemError::MissingFrequency)?;

        Oscillator::try_new(omega, self.truncated_dim)
    }
}

#[cfg(test)]
mod tests {
    use common::{errors::SystemError, system::QuantumSystem};

    use super::Oscillator;

    #[test]
    fn test_eigenvals_ladder() {
        let oscillator = Oscillator::new(2.0f64, None);

        assert_eq!(oscillator.eigenvals(4), vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_eigenvals_empty() {
        let oscillator = Oscillator::new(1.0f64, None);

        assert!(oscillator.eigenvals(0).is_empty());
    }

    #[test]
    fn test_eigenvals_default_count() {
        let oscillator = Oscillator::new(0.5f32, Some(10));
        let evals = oscillator.eigenvals_default();

        assert_eq!(evals.len(), Oscillator::<f32>::DEFAULT_EVALS_COUNT);
        assert_eq!(evals, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_eigenvals_are_equally_spaced() {
        let omega = 2.0 * std::f64::consts::PI * 5.7;
        let evals = Oscillator::new(omega, None).eigenvals(20);

        assert_eq!(evals[0], 0.0);
        for pair in evals.windows(2) {
            approx::assert_relative_eq!(pair[1] - pair[0], omega, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_eigenvals_do_not_check_frequency() {
        let evals = Oscillator::new(-1.0f64, None).eigenvals(3);

        assert_eq!(evals, vec![0.0, -1.0, -2.0]);
    }

    #[test]
    fn test_hilbertdim() {
        assert_eq!(Oscillator::new(1.0f64, Some(5)).hilbertdim(), Some(5));
        assert_eq!(Oscillator::new(1.0f64, None).hilbertdim(), None);
        assert_eq!(Oscillator::new(1.0f64, Some(0)).hilbertdim(), Some(0));
    }

    #[test]
    fn test_sys_type_and_accessors() {
        let oscillator = Oscillator::new(3.0f64, Some(4));

        assert_eq!(oscillator.sys_type(), "Oscillator");
        assert_eq!(oscillator.omega(), 3.0);
        assert_eq!(oscillator.truncated_dim(), Some(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Oscillator::new(1.5f64, Some(8)).to_string(),
            "Oscillator(omega=1.5, truncated_dim=8)"
        );
        assert_eq!(
            Oscillator::new(2.0f64, None).to_string(),
            "Oscillator(omega=2, truncated_dim=None)"
        );
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            Oscillator::try_new(1.0f64, Some(3)),
            Ok(Oscillator::new(1.0, Some(3)))
        );
        assert_eq!(
            Oscillator::try_new(0.0f64, None),
            Err(SystemError::InvalidFrequency(0.0))
        );
        assert!(matches!(
            Oscillator::try_new(f64::NAN, None),
            Err(SystemError::InvalidFrequency(_))
        ));
        assert_eq!(
            Oscillator::try_new(1.0f64, Some(0)),
            Err(SystemError::ZeroDimension)
        );
    }

    #[test]
    fn test_builder() {
        let oscillator = Oscillator::build()
            .omega(4.0f64)
            .truncated_dim(12)
            .finalize()
            .unwrap();

        assert_eq!(oscillator, Oscillator::new(4.0, Some(12)));
        assert_eq!(
            Oscillator::build().omega(1.0f64).finalize().unwrap().hilbertdim(),
            None
        );
        assert_eq!(
            Oscillator::<f64>::build().truncated_dim(3).finalize(),
            Err(SystemError::MissingFrequency)
        );
        assert_eq!(
            Oscillator::build().omega(-3.0f64).finalize(),
            Err(SystemError::InvalidFrequency(-3.0))
        );
    }
}
