use crate::engine::data::complex::Complex;
use crate::engine::fractals::escape_time::{IterationLimits, escape_time};

/// `z ← z² + c`, starting from `z = 0` with `c` the plane coordinate.
#[must_use]
pub fn iterate(point: Complex, limits: IterationLimits) -> u32 {
    escape_time(Complex::ZERO, limits, |z| z.square() + point)
}
