mod adapters;
mod controllers;
mod engine;
mod presenters;

pub use adapters::pixel_format::copy_rgba_to_rgb;
pub use controllers::cli::controller::{CliController, CliControllerError};
pub use controllers::cli::settings::{RenderSettings, SettingsError, SettingsOverrides};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use engine::actions::iterate_point::iterate;
pub use engine::actions::ports::colour_map::ColourMap;
pub use engine::actions::ports::fractal_algorithm::FractalAlgorithm;
pub use engine::actions::render::{RenderError, Renderer, render};
pub use engine::colour_mapping::palette_gradient::{PaletteColourMap, colour_of};
pub use engine::data::colour::Colour;
pub use engine::data::complex::{Complex, ParseComplexError};
pub use engine::data::fractal_config::{FractalConfig, FractalConfigError, FractalKind};
pub use engine::data::palette::{ColourShift, Palette, PaletteError};
pub use engine::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use engine::data::point::Point;
pub use engine::data::raster_size::{RasterSize, RasterSizeError};
pub use engine::data::view_config::{ViewConfig, ViewConfigError};
pub use engine::fractals::fractal_kinds::{FractalType, UnknownFractalType};
pub use engine::util::pixel_to_complex_coords::{PlaneMapper, pixel_to_complex_coords};
pub use presenters::file::ppm::PpmFilePresenter;
