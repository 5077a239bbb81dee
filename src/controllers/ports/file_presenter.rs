use std::path::Path;

use crate::engine::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
