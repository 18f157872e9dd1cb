use crate::Float;

/// Evaluates the physicists' Hermite polynomial $H_n(x)$.
///
/// Uses the three-term recurrence
/// $$ H_{k+1}(x) = 2x H_k(x) - 2k H_{k-1}(x), \quad H_0 = 1, \quad H_1 = 2x. $$
pub fn hermite<T: Float>(n: u32, x: T) -> T {
    let two = T::one() + T::one();

    if n == 0 {
        return T::one();
    }

    let mut previous = T::one();
    let mut current = two * x;
    for k in 1..n as usize {
        let next = two * x * current - two * T::from_count(k) * previous;
        previous = current;
        current = next;
    }

    current
}
