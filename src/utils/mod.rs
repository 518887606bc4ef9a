//! Internal utility functions for imageops-sharpen.
//!
//! This module contains common functionality shared by the buffer and
//! convolution code.

use crate::error::PixelBufferError;
use image::Primitive;
use imageproc::definitions::Clamp;

/// Number of bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Clamps a floating-point value to the range of a primitive type.
///
/// Values outside the range saturate; values inside are truncated towards
/// zero, which is imageproc's `Clamp` behavior.
///
/// # Arguments
///
/// * `value` - The floating-point value to clamp
///
/// # Returns
///
/// The clamped value as the target primitive type
#[inline]
pub fn clamp_f64_to_primitive<T: Primitive + Clamp<f64>>(value: f64) -> T {
    T::clamp(value)
}

/// Validates that an image has non-zero dimensions.
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), PixelBufferError> {
    if width == 0 || height == 0 {
        Err(PixelBufferError::EmptyDimensions { width, height })
    } else {
        Ok(())
    }
}

/// Computes the byte length of an RGBA buffer of the given dimensions.
///
/// # Errors
///
/// `PixelBufferError::TooLarge` if `width * height * 4` overflows `usize`.
pub fn rgba_len(width: u32, height: u32) -> Result<usize, PixelBufferError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(PixelBufferError::TooLarge { width, height })
}
