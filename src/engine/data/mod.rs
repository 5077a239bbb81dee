pub mod colour;
pub mod complex;
pub mod fractal_config;
pub mod palette;
pub mod pixel_buffer;
pub mod point;
pub mod raster_size;
pub mod view_config;
