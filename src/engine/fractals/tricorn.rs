use crate::engine::data::complex::Complex;
use crate::engine::fractals::escape_time::{IterationLimits, escape_time};

/// Mandelbrot with the orbit conjugated before squaring: `z ← conj(z)² + c`.
#[must_use]
pub fn iterate(point: Complex, limits: IterationLimits) -> u32 {
    escape_time(Complex::ZERO, limits, |z| Complex {
        real: z.real * z.real - z.imag * z.imag + point.real,
        imag: -2.0 * z.real * z.imag + point.imag,
    })
}
