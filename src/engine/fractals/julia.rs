use crate::engine::data::complex::Complex;
use crate::engine::fractals::escape_time::{IterationLimits, escape_time};

/// `z ← z² + c`, starting from the plane coordinate with a fixed `c`.
#[must_use]
pub fn iterate(point: Complex, constant: Complex, limits: IterationLimits) -> u32 {
    escape_time(point, limits, |z| z.square() + constant)
}
