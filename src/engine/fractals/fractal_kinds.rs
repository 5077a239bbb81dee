use crate::engine::data::complex::Complex;
use crate::engine::data::fractal_config::{
    DEFAULT_CONSTANT, DEFAULT_MULTIBROT_EXPONENT, FractalKind,
};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fractal type '{0}'")]
pub struct UnknownFractalType(pub String);

/// Tag-only list of the supported dynamical systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalType {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Tricorn,
    Multibrot,
    Newton,
    Phoenix,
    Lambda,
}

impl FractalType {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Tricorn,
        Self::Multibrot,
        Self::Newton,
        Self::Phoenix,
        Self::Lambda,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning-ship",
            Self::Tricorn => "tricorn",
            Self::Multibrot => "multibrot",
            Self::Newton => "newton",
            Self::Phoenix => "phoenix",
            Self::Lambda => "lambda",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot set",
            Self::Julia => "Julia set",
            Self::BurningShip => "Burning Ship",
            Self::Tricorn => "Tricorn",
            Self::Multibrot => "Multibrot",
            Self::Newton => "Newton (z³ - 1)",
            Self::Phoenix => "Phoenix",
            Self::Lambda => "Lambda (logistic map)",
        }
    }

    /// Builds the kind with its default parameters.
    #[must_use]
    pub fn with_defaults(self) -> FractalKind {
        self.with_params(DEFAULT_CONSTANT, DEFAULT_MULTIBROT_EXPONENT)
    }

    /// Builds the kind, taking from `parameter` and `exponent` whatever it
    /// uses and ignoring the rest.
    #[must_use]
    pub fn with_params(self, parameter: Complex, exponent: f64) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia => FractalKind::Julia {
                constant: parameter,
            },
            Self::BurningShip => FractalKind::BurningShip,
            Self::Tricorn => FractalKind::Tricorn,
            Self::Multibrot => FractalKind::Multibrot { exponent },
            Self::Newton => FractalKind::Newton,
            Self::Phoenix => FractalKind::Phoenix { parameter },
            Self::Lambda => FractalKind::Lambda,
        }
    }
}

impl std::fmt::Display for FractalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalType {
    type Err = UnknownFractalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| UnknownFractalType(s.to_string()))
    }
}
