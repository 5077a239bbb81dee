use crate::engine::data::complex::Complex;
use crate::engine::data::point::Point;
use crate::engine::data::raster_size::RasterSize;
use crate::engine::data::view_config::ViewConfig;

/// Raster-to-plane transform with the per-render constants worked out once.
///
/// The raster center lands on `view.center`; offsets from it are scaled by
/// `1 / zoom_scale` and then rotated by `rotation_degrees`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapper {
    half_width: f64,
    half_height: f64,
    scale: f64,
    sin: f64,
    cos: f64,
    center: Complex,
}

impl PlaneMapper {
    #[must_use]
    pub fn new(raster_size: RasterSize, view: &ViewConfig) -> Self {
        let (sin, cos) = view.rotation_degrees.to_radians().sin_cos();

        Self {
            half_width: f64::from(raster_size.width()) / 2.0,
            half_height: f64::from(raster_size.height()) / 2.0,
            scale: 1.0 / view.zoom_scale,
            sin,
            cos,
            center: view.center,
        }
    }

    #[inline]
    #[must_use]
    pub fn map(&self, x: u32, y: u32) -> Complex {
        let x_offset = (f64::from(x) - self.half_width) * self.scale;
        let y_offset = (f64::from(y) - self.half_height) * self.scale;

        Complex {
            real: x_offset * self.cos - y_offset * self.sin + self.center.real,
            imag: x_offset * self.sin + y_offset * self.cos + self.center.imag,
        }
    }
}

/// One-off mapping of a single pixel. Renders should build a [`PlaneMapper`]
/// once instead.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, raster_size: RasterSize, view: &ViewConfig) -> Complex {
    PlaneMapper::new(raster_size, view).map(pixel.x, pixel.y)
}
