/// Invalid parameters passed to a checked constructor or evaluator.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SystemError {
    /// The angular frequency was zero, negative or not finite.
    #[error("angular frequency must be positive and finite, got {0}")]
    InvalidFrequency(f64),
    /// The oscillator length was zero, negative or not finite.
    #[error("oscillator length must be positive and finite, got {0}")]
    InvalidLength(f64),
    /// A truncated Hilbert space of dimension zero was requested.
    #[error("truncated Hilbert-space dimension must be at least 1")]
    ZeroDimension,
    /// No angular frequency was supplied to a builder.
    #[error("angular frequency was not set")]
    MissingFrequency,
}

impl SystemError {
    /// Returns `error` as an [`Err`]. The rejection is only logged at debug level; reporting it
    /// is up to the caller.
    pub fn reject<T>(error: SystemError) -> Result<T, SystemError> {
        log::debug!("rejected: {error}");
        Err(error)
    }

    /// Checks that `value` is strictly positive and finite, otherwise builds the error with
    /// `make_error`.
    pub fn check_positive<T: crate::Float>(
        value: T,
        make_error: fn(f64) -> SystemError,
    ) -> Result<T, SystemError> {
        if value > T::zero() && value.is_finite() {
            Ok(value)
        } else {
            Self::reject(make_error(value.to_f64().unwrap_or(f64::NAN)))
        }
    }
}
