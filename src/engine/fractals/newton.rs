use crate::engine::data::complex::Complex;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Cube roots of unity, in the order they are tested.
pub const ROOTS: [Complex; 3] = [
    Complex::new(1.0, 0.0),
    Complex::new(-0.5, HALF_SQRT_3),
    Complex::new(-0.5, -HALF_SQRT_3),
];

/// Squared distance under which `z` counts as sitting on a root.
pub const ROOT_TOLERANCE: f64 = 0.001;

/// Index into [`ROOTS`] of the first root within tolerance of `z`.
#[must_use]
pub fn nearest_root(z: Complex) -> Option<usize> {
    ROOTS
        .iter()
        .position(|&root| z.distance_squared(root) < ROOT_TOLERANCE)
}

/// Newton's method on `z³ − 1` from the plane coordinate.
///
/// Returns the number of steps taken before landing on a root. Reaching
/// `max_iterations` means no convergence. A zero derivative stops the loop
/// where it is.
#[must_use]
pub fn iterate(point: Complex, max_iterations: u32) -> u32 {
    let mut z = point;
    let mut iterations = 0;

    while iterations < max_iterations {
        if nearest_root(z).is_some() {
            break;
        }

        let z_sq = z.square();
        let derivative = z_sq.scale(3.0);

        if derivative.magnitude_squared() == 0.0 {
            break;
        }

        // z - (z³ - 1) / 3z² == (2z³ + 1) / 3z²
        let numerator = (z_sq * z).scale(2.0) + Complex::ONE;
        z = numerator / derivative;
        iterations += 1;
    }

    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_are_cube_roots_of_unity() {
        for root in ROOTS {
            let cubed = root * root * root;
            assert!(cubed.distance_squared(Complex::ONE) < 1e-20);
        }
    }

    #[test]
    fn point_on_a_root_takes_zero_steps() {
        assert_eq!(iterate(Complex::new(1.0, 0.0), 100), 0);
        assert_eq!(iterate(ROOTS[1], 100), 0);
        assert_eq!(iterate(ROOTS[2], 100), 0);
    }

    #[test]
    fn origin_has_zero_derivative() {
        assert_eq!(iterate(Complex::ZERO, 100), 0);
        assert_eq!(nearest_root(Complex::ZERO), None);
    }

    #[test]
    fn converges_along_the_real_axis() {
        assert_eq!(iterate(Complex::new(2.0, 0.0), 100), 3);
        assert_eq!(iterate(Complex::new(-1.0, 0.0), 100), 6);
        assert_eq!(iterate(Complex::new(100.0, 0.0), 100), 13);
    }

    #[test]
    fn converges_off_axis() {
        assert_eq!(iterate(Complex::new(0.0, 1.0), 100), 3);
        assert_eq!(iterate(Complex::new(0.5, 0.5), 100), 6);
    }

    #[test]
    fn cap_is_never_exceeded() {
        assert_eq!(iterate(Complex::new(100.0, 0.0), 5), 5);
        assert_eq!(iterate(Complex::new(2.0, 0.0), 0), 0);
    }

    #[test]
    fn first_matching_root_wins() {
        assert_eq!(nearest_root(Complex::new(1.01, 0.0)), Some(0));
        assert_eq!(nearest_root(Complex::new(-0.5, 0.85)), Some(1));
        assert_eq!(nearest_root(Complex::new(-0.5, -0.85)), Some(2));
    }
}
