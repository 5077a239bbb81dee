use std::path::Path;
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::controllers::cli::settings::{RenderSettings, SettingsError};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::engine::actions::render::{RenderError, render};
use crate::engine::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum CliControllerError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("nothing has been rendered yet")]
    NothingRendered,
}

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, settings: &RenderSettings) -> Result<(), CliControllerError> {
        let raster_size = settings.raster_size()?;
        let view = settings.export_view()?;
        let shift = settings.colour_shift()?;
        let palette = settings.resolve_palette();

        info!(
            "Rendering {} at {}x{}",
            settings.fractal.kind.fractal_type(),
            raster_size.width(),
            raster_size.height()
        );
        info!(
            "Max iterations: {}, palette: {}",
            settings.fractal.max_iterations,
            palette.name()
        );

        let start = Instant::now();
        let buffer = render(raster_size, &settings.fractal, &view, palette, shift)?;

        info!("Duration: {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliControllerError> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or(CliControllerError::NothingRendered)?;

        self.presenter.present(buffer, &filepath)?;
        info!("Saved to {}", filepath.as_ref().display());

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
