//! Real-world scenario tests for imageops-sharpen
//!
//! These tests simulate the images users actually feed the filter and check
//! that sharpening behaves the way a user would expect.

use image::Rgba;
use imageops_sharpen::{FilterConfig, PixelBuffer, Sharpen, SUPPORTED_KERNEL_SIZES};

/// Soft horizontal ramp from dark to light with a semi-transparent overlay
fn create_soft_edge(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, _| {
        let edge = width / 2;
        let value = if x + 2 < edge {
            60
        } else if x > edge + 2 {
            180
        } else {
            // 5-pixel ramp between the two plateaus
            (60 + (x + 3 - edge) * 20) as u8
        };
        Rgba([value, value, value, 160])
    })
    .unwrap()
}

/// Contrast between the plateau pixels bordering the ramp, on the middle row
fn edge_contrast(buffer: &PixelBuffer) -> i32 {
    let (width, height) = buffer.dimensions();
    let row = height / 2;
    let edge = width / 2;
    i32::from(buffer.get_pixel(edge + 3, row)[0]) - i32::from(buffer.get_pixel(edge - 3, row)[0])
}

#[test]
fn mild_cross_sharpen_increases_edge_contrast() {
    let image = create_soft_edge(40, 20);
    // center 6 -> factor 2: out = (6v - Σn) / 2 = v + (4v - Σn) / 2
    let sharpened = image.sharpen(&FilterConfig::cross(6)).unwrap();

    assert!(edge_contrast(&sharpened) > edge_contrast(&image));
    // plateaus far from the edge stay as they are
    assert_eq!(sharpened.get_pixel(5, 10), image.get_pixel(5, 10));
    assert_eq!(sharpened.get_pixel(34, 10), image.get_pixel(34, 10));
}

#[test]
fn balanced_square_kernels_sharpen_without_shifting_plateaus() {
    let image = create_soft_edge(40, 20);

    for size in SUPPORTED_KERNEL_SIZES {
        let center_weight = (size * size) as i32;
        let sharpened = image
            .sharpen(&FilterConfig::square(size, center_weight))
            .unwrap();

        assert!(
            edge_contrast(&sharpened) >= edge_contrast(&image),
            "kernel {size}x{size} reduced contrast"
        );
        assert_eq!(sharpened.get_pixel(4, 10), image.get_pixel(4, 10));
        assert!(sharpened.pixels().all(|p| p[3] == 160));
    }
}

#[test]
fn default_square_kernel_darkens_flat_regions() {
    // center 5 against eight -1 neighbors removes more than it keeps
    let image = create_soft_edge(40, 20);
    let sharpened = image.sharpen(&FilterConfig::default()).unwrap();

    assert_eq!(sharpened.get_pixel(5, 10), Rgba([0, 0, 0, 160]));
    assert_eq!(sharpened.get_pixel(0, 10), image.get_pixel(0, 10));
}

#[test]
fn photo_sized_image_is_processed() {
    let image = PixelBuffer::from_fn(320, 240, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
    })
    .unwrap();

    let sharpened = image.sharpen(&FilterConfig::square(7, 49)).unwrap();
    assert_eq!(sharpened.dimensions(), (320, 240));
    assert_eq!(sharpened.get_pixel(0, 0), image.get_pixel(0, 0));
    assert_eq!(sharpened.get_pixel(319, 239), image.get_pixel(319, 239));
}
