use crate::engine::actions::ports::fractal_algorithm::FractalAlgorithm;
use crate::engine::data::complex::Complex;
use crate::engine::data::fractal_config::{FractalConfig, FractalKind};
use crate::engine::fractals::escape_time::IterationLimits;
use crate::engine::fractals::{
    burning_ship, julia, lambda, mandelbrot, multibrot, newton, phoenix, tricorn,
};

/// Runs the configured variant for one plane coordinate.
///
/// Total over every input, including `max_iterations == 0` (returns 0) and
/// configurations that [`FractalConfig::validate`] would reject.
#[must_use]
pub fn iterate(point: Complex, config: &FractalConfig) -> u32 {
    let limits = IterationLimits::from(config);

    match config.kind {
        FractalKind::Mandelbrot => mandelbrot::iterate(point, limits),
        FractalKind::Julia { constant } => julia::iterate(point, constant, limits),
        FractalKind::BurningShip => burning_ship::iterate(point, limits),
        FractalKind::Tricorn => tricorn::iterate(point, limits),
        FractalKind::Multibrot { exponent } => multibrot::iterate(point, exponent, limits),
        FractalKind::Phoenix { parameter } => phoenix::iterate(point, parameter, limits),
        FractalKind::Lambda => lambda::iterate(point, limits),
        FractalKind::Newton => newton::iterate(point, config.max_iterations),
    }
}

impl FractalAlgorithm for FractalConfig {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    fn iterate(&self, point: Complex) -> u32 {
        iterate(point, self)
    }
}
