use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::data::complex::Complex;
use crate::engine::data::fractal_config::{
    DEFAULT_CONSTANT, DEFAULT_MULTIBROT_EXPONENT, FractalConfig,
};
use crate::engine::data::palette::{ColourShift, DEFAULT_PALETTE_ID, Palette, PaletteError};
use crate::engine::data::raster_size::{RasterSize, RasterSizeError};
use crate::engine::data::view_config::{ViewConfig, ViewConfigError};
use crate::engine::fractals::fractal_kinds::FractalType;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    RasterSize(#[from] RasterSizeError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    View(#[from] ViewConfigError),
    #[error("export scale must be at least 1")]
    ZeroExportScale,
}

/// Everything one render needs, as stored in a settings file.
///
/// Missing fields take their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub fractal: FractalConfig,
    pub view: ViewConfig,
    /// Id of a built-in palette. Ignored when `custom_palette` is set.
    pub palette: String,
    pub custom_palette: Option<Palette>,
    pub colour_shift: f64,
    /// Renders `export_scale` times larger while framing the same region.
    pub export_scale: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fractal: FractalConfig::default(),
            view: ViewConfig::default(),
            palette: DEFAULT_PALETTE_ID.to_string(),
            custom_palette: None,
            colour_shift: 0.0,
            export_scale: 1,
        }
    }
}

/// Values given on the command line, applied on top of a settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub fractal_type: Option<FractalType>,
    pub parameter: Option<Complex>,
    pub exponent: Option<f64>,
    pub max_iterations: Option<u32>,
    pub escape_threshold: Option<f64>,
    pub center: Option<Complex>,
    pub zoom_scale: Option<f64>,
    pub rotation_degrees: Option<f64>,
    pub palette: Option<String>,
    pub colour_shift: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub export_scale: Option<u32>,
}

impl RenderSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    pub fn apply(&mut self, overrides: &SettingsOverrides) {
        self.apply_kind(overrides);

        if let Some(max_iterations) = overrides.max_iterations {
            self.fractal.max_iterations = max_iterations;
        }
        if let Some(escape_threshold) = overrides.escape_threshold {
            self.fractal.escape_threshold = escape_threshold;
        }
        if let Some(center) = overrides.center {
            self.view.center = center;
        }
        if let Some(zoom_scale) = overrides.zoom_scale {
            self.view.zoom_scale = zoom_scale;
        }
        if let Some(rotation_degrees) = overrides.rotation_degrees {
            self.view.rotation_degrees = rotation_degrees;
        }
        if let Some(palette) = &overrides.palette {
            self.palette.clone_from(palette);
            self.custom_palette = None;
        }
        if let Some(colour_shift) = overrides.colour_shift {
            self.colour_shift = colour_shift;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(export_scale) = overrides.export_scale {
            self.export_scale = export_scale;
        }
    }

    // A parameter or exponent given without a type applies to the current
    // type; switching type keeps whichever values it can reuse.
    fn apply_kind(&mut self, overrides: &SettingsOverrides) {
        if overrides.fractal_type.is_none()
            && overrides.parameter.is_none()
            && overrides.exponent.is_none()
        {
            return;
        }

        let current = self.fractal.kind;
        let fractal_type = overrides
            .fractal_type
            .unwrap_or_else(|| current.fractal_type());
        let parameter = overrides
            .parameter
            .or_else(|| current.parameter())
            .unwrap_or(DEFAULT_CONSTANT);
        let exponent = overrides
            .exponent
            .or_else(|| current.exponent())
            .unwrap_or(DEFAULT_MULTIBROT_EXPONENT);

        self.fractal.kind = fractal_type.with_params(parameter, exponent);
    }

    fn checked_export_scale(&self) -> Result<u32, SettingsError> {
        if self.export_scale == 0 {
            return Err(SettingsError::ZeroExportScale);
        }

        Ok(self.export_scale)
    }

    /// Output raster, already multiplied by the export scale.
    pub fn raster_size(&self) -> Result<RasterSize, SettingsError> {
        let scale = self.checked_export_scale()?;

        Ok(RasterSize::new(self.width, self.height)?.scaled(scale)?)
    }

    /// View matching [`RenderSettings::raster_size`].
    pub fn export_view(&self) -> Result<ViewConfig, SettingsError> {
        let scale = self.checked_export_scale()?;

        Ok(self.view.scaled_for_export(scale)?)
    }

    /// The custom palette if one is set, else the named built-in. Unknown
    /// names fall back to the default palette.
    #[must_use]
    pub fn resolve_palette(&self) -> &Palette {
        if let Some(palette) = &self.custom_palette {
            return palette;
        }

        Palette::find(&self.palette).unwrap_or_else(|| {
            let fallback = Palette::find_or_default(&self.palette);
            warn!(
                "Unknown palette '{}', using '{}'",
                self.palette,
                fallback.id()
            );
            fallback
        })
    }

    pub fn colour_shift(&self) -> Result<ColourShift, SettingsError> {
        Ok(ColourShift::new(self.colour_shift)?)
    }
}
