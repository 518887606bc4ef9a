use crate::error::{Result, SharpenError};
use crate::imageops_sharpen::pixel_buffer::PixelBuffer;
use base64::prelude::*;
use image::{DynamicImage, ImageFormat};
use log::debug;
use std::io::Cursor;

/// Boundary between the filter and whatever decodes and displays images
///
/// The filter only ever sees `PixelBuffer`s. Implementations turn encoded
/// bytes into a buffer and a buffer into something the host can show.
pub trait PixelBufferAdapter {
    /// Displayable image produced by `encode`
    type Handle;

    /// Decodes image bytes into an RGBA buffer
    ///
    /// # Errors
    ///
    /// `SharpenError::Decode` if the bytes are not a supported image. No
    /// partial buffer is produced.
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer>;

    /// Encodes a buffer for display
    fn encode(&self, buffer: &PixelBuffer) -> Result<Self::Handle>;

    /// Decodes and hands the outcome to `on_load`
    ///
    /// Hosts whose decoding completes later (a browser load event, a worker)
    /// override this and call `on_load` once the image is ready. The default
    /// decodes synchronously.
    fn decode_with<F>(&self, bytes: &[u8], on_load: F)
    where
        F: FnOnce(Result<PixelBuffer>),
    {
        on_load(self.decode(bytes));
    }
}

/// Encoded image bytes together with their format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Renders the image as a `data:<mime>;base64,<payload>` URL
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type(),
            BASE64_STANDARD.encode(&self.bytes)
        )
    }
}

/// `PixelBufferAdapter` backed by the `image` crate
///
/// Decoding guesses the format from the bytes and converts any color type
/// to 8-bit RGBA. Encoding writes `output_format`, PNG unless configured
/// otherwise. Formats without an alpha channel drop it on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCodec {
    output_format: ImageFormat,
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new(ImageFormat::Png)
    }
}

impl ImageCodec {
    pub fn new(output_format: ImageFormat) -> Self {
        Self { output_format }
    }

    pub fn output_format(&self) -> ImageFormat {
        self.output_format
    }

    /// Decodes a base64 `data:` URL
    ///
    /// # Errors
    ///
    /// * `SharpenError::DataUrl` - not a base64 data URL
    /// * `SharpenError::Decode` - payload is not a supported image
    pub fn decode_data_url(&self, url: &str) -> Result<PixelBuffer> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| SharpenError::DataUrl("missing `data:` scheme".to_string()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| SharpenError::DataUrl("missing `,` separator".to_string()))?;
        if !meta.ends_with(";base64") {
            return Err(SharpenError::DataUrl(format!(
                "unsupported encoding in `{meta}`"
            )));
        }
        let bytes = BASE64_STANDARD
            .decode(payload)
            .map_err(|e| SharpenError::DataUrl(e.to_string()))?;
        self.decode(&bytes)
    }
}

impl PixelBufferAdapter for ImageCodec {
    type Handle = EncodedImage;

    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        let image = image::load_from_memory(bytes).map_err(SharpenError::Decode)?;
        debug!(
            "decoded {}x{} {:?} image from {} bytes",
            image.width(),
            image.height(),
            image.color(),
            bytes.len()
        );
        Ok(PixelBuffer::from_rgba_image(image.into_rgba8())?)
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Self::Handle> {
        let image = DynamicImage::ImageRgba8(buffer.clone().into_rgba_image()?);
        let image = match self.output_format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
            _ => image,
        };

        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), self.output_format)
            .map_err(SharpenError::Encode)?;
        debug!(
            "encoded {}x{} buffer as {:?} ({} bytes)",
            buffer.width(),
            buffer.height(),
            self.output_format,
            bytes.len()
        );

        Ok(EncodedImage {
            format: self.output_format,
            bytes,
        })
    }
}
