mod error;
mod imageops_sharpen;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use error::{ConfigurationError, PixelBufferError, Result, SharpenError};
pub use imageops_sharpen::adapter::{EncodedImage, ImageCodec, PixelBufferAdapter};
pub use imageops_sharpen::config::{
    FilterConfig, KernelShape, CENTER_WEIGHT_RANGE, DEFAULT_CENTER_WEIGHT, DEFAULT_KERNEL_SIZE,
    SUPPORTED_KERNEL_SIZES,
};
pub use imageops_sharpen::convolve::{convolve, has_interior, COLOR_CHANNELS};
pub use imageops_sharpen::kernel::{Kernel, SIDE_WEIGHT};
pub use imageops_sharpen::pixel_buffer::PixelBuffer;
pub use imageops_sharpen::session::Session;
pub use imageops_sharpen::sharpen::Sharpen;
pub use imageops_sharpen::strategy::{KernelStrategy, NormalizationFactor, CROSS_NEIGHBORS};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
