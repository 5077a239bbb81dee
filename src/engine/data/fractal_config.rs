use crate::engine::data::complex::Complex;
use crate::engine::fractals::fractal_kinds::FractalType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_ITERATIONS: u32 = 64;
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 4.0;
pub const DEFAULT_CONSTANT: Complex = Complex::new(-0.4, 0.6);
pub const DEFAULT_MULTIBROT_EXPONENT: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum FractalConfigError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("escape threshold must be positive and finite: {0}")]
    InvalidEscapeThreshold(f64),
}

/// The dynamical system to iterate, with the parameters only it uses.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia { constant: Complex },
    BurningShip,
    Tricorn,
    Multibrot { exponent: f64 },
    Phoenix { parameter: Complex },
    Lambda,
    Newton,
}

impl FractalKind {
    #[must_use]
    pub const fn fractal_type(&self) -> FractalType {
        match self {
            Self::Mandelbrot => FractalType::Mandelbrot,
            Self::Julia { .. } => FractalType::Julia,
            Self::BurningShip => FractalType::BurningShip,
            Self::Tricorn => FractalType::Tricorn,
            Self::Multibrot { .. } => FractalType::Multibrot,
            Self::Phoenix { .. } => FractalType::Phoenix,
            Self::Lambda => FractalType::Lambda,
            Self::Newton => FractalType::Newton,
        }
    }

    /// The Julia constant or Phoenix parameter, when the variant has one.
    #[must_use]
    pub const fn parameter(&self) -> Option<Complex> {
        match *self {
            Self::Julia { constant } => Some(constant),
            Self::Phoenix { parameter } => Some(parameter),
            _ => None,
        }
    }

    #[must_use]
    pub const fn exponent(&self) -> Option<f64> {
        match *self {
            Self::Multibrot { exponent } => Some(exponent),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub kind: FractalKind,
    pub max_iterations: u32,
    pub escape_threshold: f64,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            kind: FractalKind::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
        }
    }
}

impl FractalConfig {
    #[must_use]
    pub fn new(kind: FractalKind, max_iterations: u32, escape_threshold: f64) -> Self {
        Self {
            kind,
            max_iterations,
            escape_threshold,
        }
    }

    /// Rejects configurations the per-pixel loop would otherwise have to
    /// special-case. The Multibrot exponent is never rejected.
    pub fn validate(&self) -> Result<(), FractalConfigError> {
        if self.max_iterations == 0 {
            return Err(FractalConfigError::ZeroMaxIterations);
        }

        if !(self.escape_threshold.is_finite() && self.escape_threshold > 0.0) {
            return Err(FractalConfigError::InvalidEscapeThreshold(
                self.escape_threshold,
            ));
        }

        Ok(())
    }

    /// Squared escape radius, compared against `|z|²`.
    #[must_use]
    pub fn bailout_squared(&self) -> f64 {
        self.escape_threshold * self.escape_threshold
    }
}
