use crate::engine::data::complex::Complex;

pub trait FractalAlgorithm {
    fn max_iterations(&self) -> u32;

    /// Iteration result for one plane coordinate, in `0..=max_iterations()`.
    fn iterate(&self, point: Complex) -> u32;
}
