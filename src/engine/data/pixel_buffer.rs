use crate::engine::data::colour::Colour;
use crate::engine::data::point::Point;
use crate::engine::data::raster_size::RasterSize;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;
pub const OPAQUE: u8 = 255;

fn raster_size_to_buffer_size(raster_size: RasterSize) -> usize {
    raster_size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel {pixel:?} outside of raster {raster_size:?}")]
    PixelOutsideBounds {
        pixel: Point,
        raster_size: RasterSize,
    },
    #[error("raster size {raster_size_bytes} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        raster_size_bytes: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA raster, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    raster_size: RasterSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates an opaque black raster.
    #[must_use]
    pub fn new(raster_size: RasterSize) -> Self {
        let mut buffer = vec![0; raster_size_to_buffer_size(raster_size)];

        for pixel in buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = OPAQUE;
        }

        Self {
            raster_size,
            buffer,
        }
    }

    pub fn from_data(
        raster_size: RasterSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let raster_size_bytes = raster_size_to_buffer_size(raster_size);

        if raster_size_bytes != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                raster_size_bytes,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            raster_size,
            buffer,
        })
    }

    #[must_use]
    pub fn raster_size(&self) -> RasterSize {
        self.raster_size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    /// Mutable RGBA rows, top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let row_bytes = self.raster_size.width() as usize * BYTES_PER_PIXEL;
        self.buffer.chunks_exact_mut(row_bytes)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        if !self.raster_size.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                raster_size: self.raster_size,
            });
        }

        let index = (pixel.y as usize * self.raster_size.width() as usize + pixel.x as usize)
            * BYTES_PER_PIXEL;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
