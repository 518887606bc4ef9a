//! Test utilities for imageops-sharpen
//!
//! This module provides common fixtures for testing the filter.
//! It is only compiled when running tests.

use crate::imageops_sharpen::pixel_buffer::PixelBuffer;
use crate::Image;
use image::Rgba;

/// Creates a buffer where every pixel has the same value.
pub fn create_flat_buffer(width: u32, height: u32, pixel: Rgba<u8>) -> PixelBuffer {
    PixelBuffer::from_pixel(width, height, pixel).unwrap()
}

/// Creates a buffer with distinct values per channel and varying alpha.
///
/// Red grows along x, green along y, blue along the diagonal; alpha cycles
/// so that alpha passthrough is observable.
pub fn create_gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        Rgba([
            ((x * 255) / width.max(2).saturating_sub(1).max(1)).min(255) as u8,
            ((y * 255) / height.max(2).saturating_sub(1).max(1)).min(255) as u8,
            ((x + y) * 37 % 256) as u8,
            (255 - (x * 13 + y * 7) % 200) as u8,
        ])
    })
    .unwrap()
}

/// Creates a 3x3 patch with the given center, orthogonal neighbor and
/// corner values on every color channel.
///
/// Alpha is 200 everywhere.
pub fn create_patch_buffer(center: u8, neighbor: u8, corner: u8) -> PixelBuffer {
    PixelBuffer::from_fn(3, 3, |x, y| {
        let value = match (x, y) {
            (1, 1) => center,
            (1, _) | (_, 1) => neighbor,
            _ => corner,
        };
        Rgba([value, value, value, 200])
    })
    .unwrap()
}

/// Creates a 2x2 RGBA image with known pixel values:
/// - (0,0): [200, 150, 100, 255]
/// - (1,0): [100, 200, 150, 128]
/// - (0,1): [150, 100, 200, 64]
/// - (1,1): [50, 75, 25, 0]
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_patch_buffer_places_values() {
        let patch = create_patch_buffer(100, 50, 7);
        assert_eq!(patch.get_pixel(1, 1), Rgba([100, 100, 100, 200]));
        assert_eq!(patch.get_pixel(1, 0), Rgba([50, 50, 50, 200]));
        assert_eq!(patch.get_pixel(0, 1), Rgba([50, 50, 50, 200]));
        assert_eq!(patch.get_pixel(2, 2), Rgba([7, 7, 7, 200]));
    }

    #[test]
    fn create_gradient_buffer_varies_alpha() {
        let buffer = create_gradient_buffer(5, 5);
        assert_ne!(buffer.get_pixel(0, 0)[3], buffer.get_pixel(1, 0)[3]);
        assert_eq!(buffer.get_pixel(4, 0)[0], 255);
    }
}
