use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a complex number as 're,im', got '{0}'")]
pub struct ParseComplexError(pub String);

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }

    /// Squared distance to `other`, without taking a square root.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Real power through the polar form `r^e * (cos(e*phi), sin(e*phi))`.
    ///
    /// No special casing for `z = 0` or fractional exponents: the result is
    /// whatever `powf` and `atan2` produce.
    #[must_use]
    pub fn powf_polar(self, exponent: f64) -> Self {
        let r = self.magnitude_squared().sqrt();
        let phi = self.imag.atan2(self.real);
        let r_pow = r.powf(exponent);
        let angle = phi * exponent;

        Self {
            real: r_pow * angle.cos(),
            imag: r_pow * angle.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

// Division by zero yields non-finite parts; callers that can hit a zero
// denominator check it first.
impl Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();
        let numerator = self * other.conjugate();

        Self {
            real: numerator.real / denominator,
            imag: numerator.imag / denominator,
        }
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    /// Parses `"re,im"`, e.g. `"-0.4,0.6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseComplexError(s.to_string());
        let (real, imag) = s.split_once(',').ok_or_else(error)?;

        Ok(Self {
            real: real.trim().parse().map_err(|_| error())?,
            imag: imag.trim().parse().map_err(|_| error())?,
        })
    }
}
