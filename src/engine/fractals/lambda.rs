use crate::engine::data::complex::Complex;
use crate::engine::fractals::escape_time::{IterationLimits, escape_time};

const CRITICAL_POINT: Complex = Complex::new(0.5, 0.0);

/// Logistic map `z ← c·z·(1 − z)` from its critical point.
#[must_use]
pub fn iterate(point: Complex, limits: IterationLimits) -> u32 {
    escape_time(CRITICAL_POINT, limits, |z| point * (z * (Complex::ONE - z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_iterations: u32) -> IterationLimits {
        IterationLimits::new(max_iterations, 4.0)
    }

    #[test]
    fn zero_parameter_collapses_to_zero() {
        assert_eq!(iterate(Complex::ZERO, limits(100)), 100);
    }

    #[test]
    fn stable_real_parameters_stay_bounded() {
        for real in [-2.0, 1.0, 2.0, 3.0, 4.0] {
            assert_eq!(iterate(Complex::new(real, 0.0), limits(100)), 100, "c = {real}");
        }
    }

    #[test]
    fn large_parameters_escape() {
        assert_eq!(iterate(Complex::new(5.0, 0.0), limits(100)), 3);
        assert_eq!(iterate(Complex::new(10.0, 10.0), limits(100)), 2);
        assert_eq!(iterate(Complex::new(1.0, 1.0), limits(100)), 6);
    }
}
