use common::{coordinates::Coordinates, errors::SystemError, special::hermite, Float};

/// The normalization $N = (2^n\, n!\, l_{osc})^{-1/2}\, \pi^{-1/4}$ of the `n`-th eigenfunction.
///
/// Evaluated in log space; $2^n n!$ itself overflows `f32` from `n = 28`.
fn normalization<T: Float>(n: u32, losc: T) -> T {
    let two = T::one() + T::one();
    let n = T::from_count(n as usize);
    let log_norm = n * two.ln() + (n + T::one()).ln_gamma() + losc.ln();

    (-log_norm / two).exp() * T::PI().sqrt().sqrt().recip()
}

/// $\psi_n(x)$ given a precomputed [`normalization`].
fn evaluate<T: Float>(norm: T, n: u32, x: T, losc: T) -> T {
    let two = T::one() + T::one();

    norm * hermite(n, x / losc) * (-(x * x) / (two * losc * losc)).exp()
}

/// For a quantum number `n = 0, 1, 2, ...`, returns the value of the harmonic oscillator wave
/// function
/// $$ \psi_n(x) = N H_n(x/l_{osc}) \exp\left(-\frac{x^2}{2 l_{osc}^2}\right), $$
/// at every coordinate of `x`, $N$ being the proper normalization factor. The result has the
/// shape of `x`.
///
/// `losc` is the oscillator length, defined via $\langle 0|x^2|0\rangle = l_{osc}^2/2$. It is
/// not checked: a zero or negative length gives non-finite values, see
/// [`try_harm_osc_wavefunction`] for the checked variant.
pub fn harm_osc_wavefunction<T, X>(n: u32, x: &X, losc: T) -> X::Output
where
    T: Float,
    X: Coordinates<T> + ?Sized,
{
    log::trace!(
        "evaluating psi_{n} on {} coordinate(s) with losc = {losc}",
        x.count()
    );

    let norm = normalization(n, losc);
    x.map_coordinates(|xk| evaluate(norm, n, xk, losc))
}

/// [`harm_osc_wavefunction`] at a single coordinate.
pub fn harm_osc_wavefunction_at<T: Float>(n: u32, x: T, losc: T) -> T {
    evaluate(normalization(n, losc), n, x, losc)
}

/// [`harm_osc_wavefunction`], rejecting an oscillator length that is not strictly positive and
/// finite.
pub fn try_harm_osc_wavefunction<T, X>(n: u32, x: &X, losc: T) -> Result<X::Output, SystemError>
where
    T: Float,
    X: Coordinates<T> + ?Sized,
{
    let losc = SystemError::check_positive(losc, SystemError::InvalidLength)?;

    Ok(harm_osc_wavefunction(n, x, losc))
}
