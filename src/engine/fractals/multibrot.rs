use crate::engine::data::complex::Complex;
use crate::engine::fractals::escape_time::{IterationLimits, escape_time};

/// `z ← z^e + c` from `z = 0`.
///
/// Exponents 3 and 4 use their binomial expansions. Every other exponent,
/// including fractional and negative ones, goes through [`iterate_polar`].
#[must_use]
pub fn iterate(point: Complex, exponent: f64, limits: IterationLimits) -> u32 {
    if exponent == 3.0 {
        escape_time(Complex::ZERO, limits, |z| cube(z) + point)
    } else if exponent == 4.0 {
        escape_time(Complex::ZERO, limits, |z| fourth_power(z) + point)
    } else {
        iterate_polar(point, exponent, limits)
    }
}

/// The generic path, usable for any real exponent.
#[must_use]
pub fn iterate_polar(point: Complex, exponent: f64, limits: IterationLimits) -> u32 {
    escape_time(Complex::ZERO, limits, |z| z.powf_polar(exponent) + point)
}

fn cube(z: Complex) -> Complex {
    let real_sq = z.real * z.real;
    let imag_sq = z.imag * z.imag;

    Complex {
        real: z.real * (real_sq - 3.0 * imag_sq),
        imag: z.imag * (3.0 * real_sq - imag_sq),
    }
}

fn fourth_power(z: Complex) -> Complex {
    let real_sq = z.real * z.real;
    let imag_sq = z.imag * z.imag;

    Complex {
        real: real_sq * real_sq - 6.0 * real_sq * imag_sq + imag_sq * imag_sq,
        imag: 4.0 * z.real * z.imag * (real_sq - imag_sq),
    }
}
