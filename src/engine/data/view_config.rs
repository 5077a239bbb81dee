use crate::engine::data::complex::Complex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ZOOM_SCALE: f64 = 150.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewConfigError {
    #[error("zoom scale must be positive and finite: {0}")]
    InvalidZoomScale(f64),
    #[error("zoom factor must be positive and finite: {0}")]
    InvalidZoomFactor(f64),
    #[error("view center must be finite: {0:?}")]
    NonFiniteCenter(Complex),
    #[error("rotation must be finite: {0}")]
    NonFiniteRotation(f64),
}

/// Where the raster sits on the complex plane.
///
/// `zoom_scale` is pixels per unit length on the plane; larger values
/// magnify. `rotation_degrees` turns the raster around its own center.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: Complex,
    pub zoom_scale: f64,
    pub rotation_degrees: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: Complex::new(-0.5, 0.0),
            zoom_scale: DEFAULT_ZOOM_SCALE,
            rotation_degrees: 0.0,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ViewConfigError> {
        if !(self.zoom_scale.is_finite() && self.zoom_scale > 0.0) {
            return Err(ViewConfigError::InvalidZoomScale(self.zoom_scale));
        }

        if !(self.center.real.is_finite() && self.center.imag.is_finite()) {
            return Err(ViewConfigError::NonFiniteCenter(self.center));
        }

        if !self.rotation_degrees.is_finite() {
            return Err(ViewConfigError::NonFiniteRotation(self.rotation_degrees));
        }

        Ok(())
    }

    /// Moves the center against a drag of `(dx, dy)` pixels so the plane
    /// follows the pointer. The drag is rotated back into plane axes first.
    #[must_use]
    pub fn panned_by_pixels(&self, dx: f64, dy: f64) -> Self {
        let shift_real = dx / self.zoom_scale;
        let shift_imag = dy / self.zoom_scale;
        let (sin, cos) = self.rotation_degrees.to_radians().sin_cos();

        let shift = Complex {
            real: shift_real * cos + shift_imag * sin,
            imag: -shift_real * sin + shift_imag * cos,
        };

        Self {
            center: self.center - shift,
            ..*self
        }
    }

    pub fn zoomed_by(&self, factor: f64) -> Result<Self, ViewConfigError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewConfigError::InvalidZoomFactor(factor));
        }

        Ok(Self {
            zoom_scale: self.zoom_scale * factor,
            ..*self
        })
    }

    /// Keeps the framed region when the raster grows by `factor` in both
    /// dimensions.
    pub fn scaled_for_export(&self, factor: u32) -> Result<Self, ViewConfigError> {
        self.zoomed_by(f64::from(factor))
    }
}
