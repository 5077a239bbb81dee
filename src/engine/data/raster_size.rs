use crate::engine::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RasterSizeError {
    #[error("raster size must be at least 1x1: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Dimensions of an output raster in pixels. Origin is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterSize {
    width: u32,
    height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterSizeError> {
        if width == 0 || height == 0 {
            return Err(RasterSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Multiplies both dimensions, e.g. for a high-resolution export.
    pub fn scaled(&self, factor: u32) -> Result<Self, RasterSizeError> {
        let width = self.width.saturating_mul(factor);
        let height = self.height.saturating_mul(factor);

        Self::new(width, height)
    }
}
