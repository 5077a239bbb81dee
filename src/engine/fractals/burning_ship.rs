use crate::engine::data::complex::Complex;
use crate::engine::fractals::escape_time::{IterationLimits, escape_time};

/// Folds both components to their absolute values before squaring.
///
/// The imaginary axis of `c` is flipped so the ship renders upright.
#[must_use]
pub fn iterate(point: Complex, limits: IterationLimits) -> u32 {
    let c = point.conjugate();

    escape_time(Complex::ZERO, limits, |z| Complex {
        real: (z.real * z.real - z.imag * z.imag + c.real).abs(),
        imag: (2.0 * z.real * z.imag).abs() + c.imag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_iterations: u32) -> IterationLimits {
        IterationLimits::new(max_iterations, 4.0)
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(iterate(Complex::ZERO, limits(100)), 100);
    }

    #[test]
    fn far_point_escapes_after_one_update() {
        assert_eq!(iterate(Complex::new(10.0, 10.0), limits(100)), 1);
    }

    #[test]
    fn imaginary_axis_is_flipped() {
        // c = (0, -0.5) after the flip stays bounded; its mirror drifts out
        assert_eq!(iterate(Complex::new(0.0, 0.5), limits(100)), 100);
        assert_eq!(iterate(Complex::new(0.0, -0.5), limits(100)), 7);
    }

    #[test]
    fn real_part_is_folded_positive() {
        // c = -1.8: z1 = |-1.8| = 1.8, z2 = |3.24 - 1.8| = 1.44, stays bounded
        assert_eq!(iterate(Complex::new(-1.8, 0.0), limits(100)), 100);
    }
}
