use crate::error::ConfigurationError;
use crate::imageops_sharpen::config::FilterConfig;
use crate::imageops_sharpen::convolve::{convolve, convolve_rgba};
use crate::imageops_sharpen::kernel::Kernel;
use crate::imageops_sharpen::pixel_buffer::PixelBuffer;
use crate::imageops_sharpen::strategy::{KernelStrategy, NormalizationFactor};
use crate::Image;
use image::Rgba;

/// Trait providing convolution sharpening on RGBA images
///
/// The source is never modified; every call returns a fresh image.
pub trait Sharpen {
    /// Filtered image type
    type Output;

    /// Convolves with an explicit kernel and normalization factor
    fn convolve_with(&self, kernel: &Kernel, factor: NormalizationFactor) -> Self::Output;

    /// Builds the kernel from `strategy` and convolves with it
    ///
    /// # Errors
    ///
    /// Any `ConfigurationError` returned by `KernelStrategy::build`.
    fn sharpen_with(&self, strategy: &KernelStrategy) -> Result<Self::Output, ConfigurationError> {
        let (kernel, factor) = strategy.build()?;
        Ok(self.convolve_with(&kernel, factor))
    }

    /// Validates `config`, builds its kernel and convolves with it
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use imageops_sharpen::{FilterConfig, PixelBuffer, Sharpen};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let buffer = PixelBuffer::from_pixel(16, 16, Rgba([90, 90, 90, 255]))?;
    /// let sharpened = buffer.sharpen(&FilterConfig::cross(5))?;
    /// assert_eq!(sharpened, buffer);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn sharpen(&self, config: &FilterConfig) -> Result<Self::Output, ConfigurationError> {
        self.sharpen_with(&config.strategy()?)
    }
}

impl Sharpen for PixelBuffer {
    type Output = Self;

    fn convolve_with(&self, kernel: &Kernel, factor: NormalizationFactor) -> Self::Output {
        convolve(self, kernel, factor)
    }
}

impl Sharpen for Image<Rgba<u8>> {
    type Output = Self;

    fn convolve_with(&self, kernel: &Kernel, factor: NormalizationFactor) -> Self::Output {
        let (width, height) = self.dimensions();
        let mut output = self.clone();
        convolve_rgba(self.as_raw(), width, height, kernel, factor, &mut output);
        output
    }
}
