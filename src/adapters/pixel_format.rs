//! Pixel format conversion helpers for presentation adapters.

use crate::engine::data::pixel_buffer::BYTES_PER_PIXEL;

const RGB_BYTES_PER_PIXEL: usize = 3;

/// Drops the alpha channel from RGBA pixel data.
///
/// A trailing partial pixel in `src` is ignored.
#[must_use]
pub fn copy_rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len() / BYTES_PER_PIXEL * RGB_BYTES_PER_PIXEL);

    for pixel in src.chunks_exact(BYTES_PER_PIXEL) {
        dst.extend_from_slice(&pixel[..RGB_BYTES_PER_PIXEL]);
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgba_to_rgb_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 255, 255, 255, // white
        ];

        assert_eq!(
            copy_rgba_to_rgb(&src),
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_copy_rgba_to_rgb_empty_buffer() {
        assert!(copy_rgba_to_rgb(&[]).is_empty());
    }

    #[test]
    fn test_copy_rgba_to_rgb_ignores_alpha_value() {
        assert_eq!(copy_rgba_to_rgb(&[128, 64, 32, 7]), vec![128, 64, 32]);
    }

    #[test]
    fn test_copy_rgba_to_rgb_ignores_partial_pixel() {
        assert_eq!(copy_rgba_to_rgb(&[10, 20, 30, 255, 40, 50]), vec![10, 20, 30]);
    }
}
