use crate::error::{Result, SharpenError};
use crate::imageops_sharpen::adapter::PixelBufferAdapter;
use crate::imageops_sharpen::config::FilterConfig;
use crate::imageops_sharpen::pixel_buffer::PixelBuffer;
use crate::imageops_sharpen::sharpen::Sharpen;
use log::{debug, warn};

/// State of one sharpening view: the loaded image, its last sharpened
/// version and the current filter settings
///
/// The filter itself is stateless; this struct only records what the
/// presentation layer would otherwise keep around.
#[derive(Debug, Clone, Default)]
pub struct Session {
    original: Option<PixelBuffer>,
    processed: Option<PixelBuffer>,
    config: FilterConfig,
}

impl Session {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Replaces the filter settings; the processed image is kept until the
    /// next `sharpen`
    pub fn set_config(&mut self, config: FilterConfig) {
        self.config = config;
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    pub fn processed(&self) -> Option<&PixelBuffer> {
        self.processed.as_ref()
    }

    /// Replaces the loaded image and drops the stale processed one
    pub fn load_buffer(&mut self, buffer: PixelBuffer) {
        debug!("session loaded {}x{} image", buffer.width(), buffer.height());
        self.original = Some(buffer);
        self.processed = None;
    }

    /// Decodes `bytes` through `adapter` and loads the result
    ///
    /// # Errors
    ///
    /// The adapter's decode error. The session is left untouched, so a
    /// previously loaded image stays on display.
    pub fn load<A: PixelBufferAdapter>(&mut self, adapter: &A, bytes: &[u8]) -> Result<()> {
        let buffer = adapter.decode(bytes)?;
        self.load_buffer(buffer);
        Ok(())
    }

    /// Sharpens the loaded image with the current settings
    ///
    /// # Errors
    ///
    /// * `SharpenError::NoImageLoaded` - nothing to sharpen
    /// * `SharpenError::InvalidConfiguration` - the settings are rejected;
    ///   the previous processed image is cleared
    pub fn sharpen(&mut self) -> Result<&PixelBuffer> {
        let original = self.original.as_ref().ok_or(SharpenError::NoImageLoaded)?;
        match original.sharpen(&self.config) {
            Ok(processed) => Ok(&*self.processed.insert(processed)),
            Err(err) => {
                warn!("sharpen failed, clearing processed image: {}", err);
                self.processed = None;
                Err(err.into())
            }
        }
    }

    /// Encodes the processed image for display, if there is one
    pub fn render<A: PixelBufferAdapter>(&self, adapter: &A) -> Result<Option<A::Handle>> {
        self.processed
            .as_ref()
            .map(|buffer| adapter.encode(buffer))
            .transpose()
    }

    /// Drops both images, keeping the settings
    pub fn clear(&mut self) {
        self.original = None;
        self.processed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imageops_sharpen::adapter::ImageCodec;
    use crate::test_utils::{create_flat_buffer, create_gradient_buffer};
    use image::Rgba;

    #[test]
    fn sharpen_without_image_returns_error() {
        let mut session = Session::default();
        assert!(matches!(
            session.sharpen(),
            Err(SharpenError::NoImageLoaded)
        ));
    }

    #[test]
    fn sharpen_stores_processed_image() {
        let mut session = Session::new(FilterConfig::square(3, 5));
        session.load_buffer(create_flat_buffer(4, 4, Rgba([80, 80, 80, 255])));

        let processed = session.sharpen().unwrap().clone();
        assert_eq!(processed.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
        assert_eq!(session.processed(), Some(&processed));
    }

    #[test]
    fn invalid_config_clears_processed_image() {
        let mut session = Session::default();
        session.load_buffer(create_gradient_buffer(5, 5));
        session.sharpen().unwrap();
        assert!(session.processed().is_some());

        session.set_config(FilterConfig::cross(4));
        assert!(matches!(
            session.sharpen(),
            Err(SharpenError::InvalidConfiguration(_))
        ));
        assert!(session.processed().is_none());
        assert!(session.original().is_some());
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let codec = ImageCodec::default();
        let mut session = Session::default();
        session.load_buffer(create_gradient_buffer(5, 5));
        session.sharpen().unwrap();
        let before = session.clone();

        assert!(session.load(&codec, b"broken").is_err());
        assert_eq!(session.original(), before.original());
        assert_eq!(session.processed(), before.processed());
    }

    #[test]
    fn loading_new_image_drops_processed() {
        let mut session = Session::default();
        session.load_buffer(create_gradient_buffer(5, 5));
        session.sharpen().unwrap();

        session.load_buffer(create_gradient_buffer(6, 6));
        assert!(session.processed().is_none());
        assert_eq!(session.original().map(PixelBuffer::dimensions), Some((6, 6)));
    }

    #[test]
    fn render_without_processed_image_is_none() {
        let session = Session::default();
        assert!(session.render(&ImageCodec::default()).unwrap().is_none());
    }

    #[test]
    fn clear_keeps_config() {
        let mut session = Session::new(FilterConfig::cross(8));
        session.load_buffer(create_gradient_buffer(3, 3));
        session.clear();
        assert!(session.original().is_none());
        assert_eq!(session.config(), &FilterConfig::cross(8));
    }
}
