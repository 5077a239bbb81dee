use crate::adapters::pixel_format::copy_rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::engine::data::pixel_buffer::PixelBuffer;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary PPM (P6). Missing parent directories are created.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(fs::File::create(filepath)?);
        let width = buffer.raster_size().width();
        let height = buffer.raster_size().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(&copy_rgba_to_rgb(buffer.buffer()))?;
        file.flush()?;

        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
