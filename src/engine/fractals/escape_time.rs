use crate::engine::data::complex::Complex;
use crate::engine::data::fractal_config::FractalConfig;

/// Loop bounds shared by every variant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationLimits {
    pub max_iterations: u32,
    pub bailout_squared: f64,
}

impl IterationLimits {
    #[must_use]
    pub fn new(max_iterations: u32, escape_threshold: f64) -> Self {
        Self {
            max_iterations,
            bailout_squared: escape_threshold * escape_threshold,
        }
    }
}

impl From<&FractalConfig> for IterationLimits {
    fn from(config: &FractalConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            bailout_squared: config.bailout_squared(),
        }
    }
}

/// Runs `step` from `z` while `|z|² <= bailout_squared` and fewer than
/// `max_iterations` updates have completed. Returns the number of updates.
///
/// A NaN modulus fails the comparison, so a trajectory that degenerates into
/// NaN counts as escaped.
#[inline]
pub fn escape_time(
    mut z: Complex,
    limits: IterationLimits,
    mut step: impl FnMut(Complex) -> Complex,
) -> u32 {
    let mut iterations = 0;

    while iterations < limits.max_iterations && z.magnitude_squared() <= limits.bailout_squared {
        z = step(z);
        iterations += 1;
    }

    iterations
}
