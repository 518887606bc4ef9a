use crate::imageops_sharpen::kernel::Kernel;
use crate::imageops_sharpen::pixel_buffer::PixelBuffer;
use crate::imageops_sharpen::strategy::NormalizationFactor;
use crate::utils::{clamp_f64_to_primitive, CHANNELS};
use itertools::iproduct;
use log::debug;

/// Number of filtered channels; alpha is never touched
pub const COLOR_CHANNELS: usize = 3;

/// Convolves a pixel buffer with `kernel` and returns a new buffer
///
/// Only interior pixels, those at least `kernel.radius()` away from every
/// edge, are computed. The border band and the alpha channel are copied
/// from the source. When the image has no interior the result is an exact
/// copy.
///
/// Each R, G and B value becomes `clamp(sum / factor, 0, 255)`, where `sum`
/// is accumulated in `i64`. The quotient is computed in `f64`, which is
/// exact for any sum below 2^53, and truncated towards zero after clamping.
///
/// ```
/// use image::Rgba;
/// use imageops_sharpen::{convolve, Kernel, NormalizationFactor, PixelBuffer};
///
/// let source = PixelBuffer::from_pixel(3, 3, Rgba([80, 80, 80, 255])).unwrap();
/// let kernel = Kernel::sharpen_square(3, 5).unwrap();
/// let output = convolve(&source, &kernel, NormalizationFactor::IDENTITY);
///
/// // 80 * 5 - 80 * 8 = -240, clamped to 0
/// assert_eq!(output.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
/// assert_eq!(output.get_pixel(0, 0), Rgba([80, 80, 80, 255]));
/// ```
pub fn convolve(source: &PixelBuffer, kernel: &Kernel, factor: NormalizationFactor) -> PixelBuffer {
    let mut output = source.clone();
    let (width, height) = source.dimensions();
    convolve_rgba(
        source.as_raw(),
        width,
        height,
        kernel,
        factor,
        output.as_raw_mut(),
    );
    output
}

/// Returns whether an image of the given size has pixels outside the border band
pub fn has_interior(width: u32, height: u32, radius: u32) -> bool {
    let band = u64::from(radius) * 2;
    u64::from(width) > band && u64::from(height) > band
}

/// Writes the filtered interior of `source` into `output`
///
/// `output` must already hold a copy of `source`; border pixels and alpha
/// are left as they are.
pub(crate) fn convolve_rgba(
    source: &[u8],
    width: u32,
    height: u32,
    kernel: &Kernel,
    factor: NormalizationFactor,
    output: &mut [u8],
) {
    debug_assert_eq!(source.len(), output.len());
    let radius = kernel.radius();
    if !has_interior(width, height, radius) {
        debug!(
            "{}x{} image has no interior for kernel radius {}, copying",
            width, height, radius
        );
        return;
    }

    let stride = width as usize * CHANNELS;
    let divisor = f64::from(factor.get());
    let r = radius as usize;

    for (y, x) in iproduct!(radius..height - radius, radius..width - radius) {
        let (x, y) = (x as usize, y as usize);
        let base = y * stride + x * CHANNELS;
        for channel in 0..COLOR_CHANNELS {
            let sum = weighted_sum(source, stride, kernel, x - r, y - r, channel);
            output[base + channel] = clamp_f64_to_primitive(sum as f64 / divisor);
        }
    }
}

/// Weighted sum of one channel over the window whose top-left is `(left, top)`
fn weighted_sum(
    source: &[u8],
    stride: usize,
    kernel: &Kernel,
    left: usize,
    top: usize,
    channel: usize,
) -> i64 {
    kernel
        .rows()
        .enumerate()
        .map(|(ky, row)| {
            let start = (top + ky) * stride + left * CHANNELS + channel;
            row.iter()
                .enumerate()
                .map(|(kx, &weight)| i64::from(source[start + kx * CHANNELS]) * i64::from(weight))
                .fold(0i64, i64::saturating_add)
        })
        .fold(0i64, i64::saturating_add)
}
