use crate::engine::data::complex::Complex;
use crate::engine::fractals::escape_time::{IterationLimits, escape_time};

/// `z_{n+1} = z_n² + p.re + p.im·z_{n-1}`, starting from the plane
/// coordinate with its axes swapped and `z_{-1} = 0`.
#[must_use]
pub fn iterate(point: Complex, parameter: Complex, limits: IterationLimits) -> u32 {
    let start = Complex::new(point.imag, point.real);
    let mut previous = Complex::ZERO;

    escape_time(start, limits, |z| {
        let next = z.square() + Complex::new(parameter.real, 0.0) + previous.scale(parameter.imag);
        previous = z;
        next
    })
}
