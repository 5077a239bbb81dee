use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::engine::actions::ports::colour_map::ColourMap;
use crate::engine::actions::ports::fractal_algorithm::FractalAlgorithm;
use crate::engine::colour_mapping::palette_gradient::PaletteColourMap;
use crate::engine::data::colour::Colour;
use crate::engine::data::fractal_config::{FractalConfig, FractalConfigError};
use crate::engine::data::palette::{ColourShift, Palette};
use crate::engine::data::pixel_buffer::{BYTES_PER_PIXEL, OPAQUE, PixelBuffer};
use crate::engine::data::raster_size::RasterSize;
use crate::engine::data::view_config::{ViewConfig, ViewConfigError};
use crate::engine::util::pixel_to_complex_coords::PlaneMapper;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid fractal configuration: {0}")]
    FractalConfig(#[from] FractalConfigError),
    #[error("invalid view configuration: {0}")]
    ViewConfig(#[from] ViewConfigError),
    #[error("row {y} is outside a raster {height} rows high")]
    RowOutOfBounds { y: u32, height: u32 },
    #[error("row buffer holds {actual} bytes, expected {expected}")]
    RowLength { expected: usize, actual: usize },
}

/// A validated render: inputs are checked once here so the per-pixel path
/// never has to.
///
/// Rows are independent. [`Renderer::render_row`] may be called for any
/// subset of rows, in any order and from any number of threads, and writes
/// the same bytes [`Renderer::render`] would.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    raster_size: RasterSize,
    fractal: FractalConfig,
    mapper: PlaneMapper,
    colour_map: PaletteColourMap<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(
        raster_size: RasterSize,
        fractal: &FractalConfig,
        view: &ViewConfig,
        palette: &'a Palette,
        shift: ColourShift,
    ) -> Result<Self, RenderError> {
        fractal.validate()?;
        view.validate()?;

        Ok(Self {
            raster_size,
            fractal: *fractal,
            mapper: PlaneMapper::new(raster_size, view),
            colour_map: PaletteColourMap::new(palette, shift, fractal.max_iterations),
        })
    }

    #[must_use]
    pub fn raster_size(&self) -> RasterSize {
        self.raster_size
    }

    /// Bytes in one RGBA row.
    #[must_use]
    pub fn row_len(&self) -> usize {
        self.raster_size.width() as usize * BYTES_PER_PIXEL
    }

    pub fn render_row(&self, y: u32, row: &mut [u8]) -> Result<(), RenderError> {
        if y >= self.raster_size.height() {
            return Err(RenderError::RowOutOfBounds {
                y,
                height: self.raster_size.height(),
            });
        }

        if row.len() != self.row_len() {
            return Err(RenderError::RowLength {
                expected: self.row_len(),
                actual: row.len(),
            });
        }

        fill_row(y, &self.mapper, &self.fractal, &self.colour_map, row);

        Ok(())
    }

    #[must_use]
    pub fn render(&self) -> PixelBuffer {
        debug!(
            "Rendering {} at {}x{}, {} iterations",
            self.fractal.kind.fractal_type(),
            self.raster_size.width(),
            self.raster_size.height(),
            self.fractal.max_iterations
        );

        let start = Instant::now();
        let buffer = fill_buffer(self.raster_size, &self.mapper, &self.fractal, &self.colour_map);

        debug!("Render finished in {:?}", start.elapsed());

        buffer
    }
}

/// Renders a full RGBA raster. Fails only on configuration the engine
/// refuses to iterate; the per-pixel path itself never fails.
pub fn render(
    raster_size: RasterSize,
    fractal: &FractalConfig,
    view: &ViewConfig,
    palette: &Palette,
    shift: ColourShift,
) -> Result<PixelBuffer, RenderError> {
    Ok(Renderer::new(raster_size, fractal, view, palette, shift)?.render())
}

fn fill_buffer<Alg, CMap>(
    raster_size: RasterSize,
    mapper: &PlaneMapper,
    algorithm: &Alg,
    colour_map: &CMap,
) -> PixelBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    let mut buffer = PixelBuffer::new(raster_size);

    for (y, row) in (0..raster_size.height()).zip(buffer.rows_mut()) {
        fill_row(y, mapper, algorithm, colour_map, row);
    }

    buffer
}

#[inline]
fn fill_row<Alg, CMap>(
    y: u32,
    mapper: &PlaneMapper,
    algorithm: &Alg,
    colour_map: &CMap,
    row: &mut [u8],
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    for (x, pixel) in (0..).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
        let point = mapper.map(x, y);
        let Colour { r, g, b } = colour_map.map(algorithm.iterate(point));

        pixel.copy_from_slice(&[r, g, b, OPAQUE]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::data::complex::Complex;
    use crate::engine::data::fractal_config::FractalKind;
    use crate::engine::data::point::Point;
    use crate::engine::fractals::fractal_kinds::FractalType;
    use rayon::prelude::*;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        fn max_iterations(&self) -> u32 {
            255
        }

        // Encodes the plane coordinate so the mapping can be read back
        fn iterate(&self, point: Complex) -> u32 {
            (point.real + 10.0 * point.imag) as u32
        }
    }

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap for StubColourMap {
        fn map(&self, iterations: u32) -> Colour {
            Colour::new(iterations as u8, 0, 7)
        }
    }

    fn raster(width: u32, height: u32) -> RasterSize {
        RasterSize::new(width, height).unwrap()
    }

    fn palette() -> &'static Palette {
        Palette::find("electric").unwrap()
    }

    fn top_left_origin_view(raster_size: RasterSize) -> ViewConfig {
        ViewConfig {
            center: Complex::new(
                f64::from(raster_size.width()) / 2.0,
                f64::from(raster_size.height()) / 2.0,
            ),
            zoom_scale: 1.0,
            rotation_degrees: 0.0,
        }
    }

    #[test]
    fn test_fill_buffer_writes_row_major_rgba() {
        let raster_size = raster(3, 2);
        let mapper = PlaneMapper::new(raster_size, &top_left_origin_view(raster_size));

        let buffer = fill_buffer(raster_size, &mapper, &StubAlgorithm {}, &StubColourMap {});

        assert_eq!(
            buffer.buffer(),
            &vec![
                0, 0, 7, 255, 1, 0, 7, 255, 2, 0, 7, 255, //
                10, 0, 7, 255, 11, 0, 7, 255, 12, 0, 7, 255,
            ]
        );
    }

    #[test]
    fn test_render_output_size_and_alpha() {
        let raster_size = raster(16, 9);
        let buffer = render(
            raster_size,
            &FractalConfig::default(),
            &ViewConfig::default(),
            palette(),
            ColourShift::default(),
        )
        .unwrap();

        assert_eq!(buffer.buffer_size(), 16 * 9 * 4);
        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_render_rejects_zero_iterations() {
        let fractal = FractalConfig::new(FractalKind::Mandelbrot, 0, 4.0);

        let result = render(
            raster(4, 4),
            &fractal,
            &ViewConfig::default(),
            palette(),
            ColourShift::default(),
        );

        assert_eq!(
            result,
            Err(RenderError::FractalConfig(FractalConfigError::ZeroMaxIterations))
        );
    }

    #[test]
    fn test_render_rejects_non_positive_zoom() {
        let view = ViewConfig {
            zoom_scale: 0.0,
            ..ViewConfig::default()
        };

        let result = render(
            raster(4, 4),
            &FractalConfig::default(),
            &view,
            palette(),
            ColourShift::default(),
        );

        assert_eq!(
            result,
            Err(RenderError::ViewConfig(ViewConfigError::InvalidZoomScale(0.0)))
        );
    }

    #[test]
    fn test_interior_pixel_is_black() {
        // Zoomed far in on the origin, every pixel is inside the set
        let view = ViewConfig {
            center: Complex::ZERO,
            zoom_scale: 1e6,
            rotation_degrees: 0.0,
        };
        let buffer = render(
            raster(4, 4),
            &FractalConfig::default(),
            &view,
            palette(),
            ColourShift::default(),
        )
        .unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 2 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_render_is_deterministic_for_every_variant() {
        for &kind in FractalType::ALL {
            let fractal = FractalConfig::new(kind.with_defaults(), 32, 4.0);
            let render_once = || {
                render(
                    raster(12, 8),
                    &fractal,
                    &ViewConfig::default(),
                    palette(),
                    ColourShift::default(),
                )
                .unwrap()
            };

            assert_eq!(render_once(), render_once(), "{kind}");
        }
    }

    #[test]
    fn test_render_row_matches_full_render() {
        let raster_size = raster(10, 6);
        let fractal = FractalConfig::default();
        let view = ViewConfig::default();
        let shift = ColourShift::new(0.3).unwrap();
        let renderer = Renderer::new(raster_size, &fractal, &view, palette(), shift).unwrap();
        let full = renderer.render();

        let mut row = vec![0; renderer.row_len()];
        renderer.render_row(4, &mut row).unwrap();

        let start = 4 * renderer.row_len();
        assert_eq!(&full.buffer()[start..start + renderer.row_len()], row.as_slice());
    }

    #[test]
    fn test_render_row_rejects_bad_rows() {
        let renderer = Renderer::new(
            raster(5, 3),
            &FractalConfig::default(),
            &ViewConfig::default(),
            palette(),
            ColourShift::default(),
        )
        .unwrap();

        let mut short = vec![0; 8];
        let mut row = vec![0; 20];

        assert_eq!(
            renderer.render_row(0, &mut short),
            Err(RenderError::RowLength {
                expected: 20,
                actual: 8
            })
        );
        assert_eq!(
            renderer.render_row(3, &mut row),
            Err(RenderError::RowOutOfBounds { y: 3, height: 3 })
        );
    }

    #[test]
    fn test_rows_rendered_in_parallel_match_sequential() {
        let raster_size = raster(40, 30);
        let view = ViewConfig {
            rotation_degrees: 20.0,
            ..ViewConfig::default()
        };

        for &kind in FractalType::ALL {
            let fractal = FractalConfig::new(kind.with_defaults(), 48, 4.0);
            let renderer =
                Renderer::new(raster_size, &fractal, &view, palette(), ColourShift::default())
                    .unwrap();
            let sequential = renderer.render();

            let mut parallel = vec![0; raster_size.pixel_count() * BYTES_PER_PIXEL];
            parallel
                .par_chunks_mut(renderer.row_len())
                .enumerate()
                .rev()
                .for_each(|(y, row)| renderer.render_row(y as u32, row).unwrap());

            assert_eq!(sequential.buffer(), &parallel, "{kind}");
        }
    }
}
