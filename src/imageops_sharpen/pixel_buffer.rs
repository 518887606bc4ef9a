use crate::error::PixelBufferError;
use crate::utils::{rgba_len, validate_non_empty_image, CHANNELS};
use image::{ImageBuffer, Rgba, RgbaImage};
use itertools::iproduct;

/// Raw RGBA pixel buffer exchanged between the codec and the filter
///
/// Bytes are laid out row-major, four per pixel (R, G, B, A). The length is
/// always `width * height * 4` and both dimensions are non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA bytes
    ///
    /// # Errors
    ///
    /// * `PixelBufferError::EmptyDimensions` - width or height is zero
    /// * `PixelBufferError::LengthMismatch` - `data.len() != width * height * 4`
    /// * `PixelBufferError::TooLarge` - the expected length overflows `usize`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        validate_non_empty_image(width, height)?;
        let expected = rgba_len(width, height)?;
        if data.len() != expected {
            return Err(PixelBufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a buffer filled with a single pixel value
    pub fn from_pixel(width: u32, height: u32, pixel: Rgba<u8>) -> Result<Self, PixelBufferError> {
        Self::from_fn(width, height, |_, _| pixel)
    }

    /// Creates a buffer by evaluating `f(x, y)` for every pixel in row-major order
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, PixelBufferError>
    where
        F: FnMut(u32, u32) -> Rgba<u8>,
    {
        validate_non_empty_image(width, height)?;
        let mut data = Vec::with_capacity(rgba_len(width, height)?);
        for (y, x) in iproduct!(0..height, 0..width) {
            data.extend_from_slice(&f(x, y).0);
        }
        Self::new(width, height, data)
    }

    /// Converts a decoded RGBA image into a buffer without copying
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self, PixelBufferError> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    /// Converts the buffer back into an RGBA image without copying
    pub fn into_rgba_image(self) -> Result<RgbaImage, PixelBufferError> {
        let (width, height) = self.dimensions();
        let actual = self.data.len();
        ImageBuffer::from_raw(width, height, self.data).ok_or(PixelBufferError::LengthMismatch {
            expected: rgba_len(width, height)?,
            actual,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the raw RGBA bytes
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns the raw RGBA bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)`
    ///
    /// # Panics
    ///
    /// If `(x, y)` lies outside the buffer.
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        let start = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let mut pixel = [0u8; CHANNELS];
        pixel.copy_from_slice(&self.data[start..start + CHANNELS]);
        Rgba(pixel)
    }

    /// Iterates over pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Rgba<u8>> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|chunk| Rgba([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }
}

impl TryFrom<RgbaImage> for PixelBuffer {
    type Error = PixelBufferError;

    fn try_from(image: RgbaImage) -> Result<Self, Self::Error> {
        Self::from_rgba_image(image)
    }
}
