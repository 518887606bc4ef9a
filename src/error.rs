use thiserror::Error;

/// Error type for kernel and filter configuration
///
/// Returned whenever a kernel cannot be built from the given parameters or
/// the derived normalization factor cannot be used as a divisor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Kernel size is zero
    ///
    /// A kernel needs at least one cell to have a center.
    #[error("Kernel size must be positive, got {size}")]
    InvalidKernelSize { size: u32 },

    /// Kernel weights do not form a square matrix
    #[error("Kernel of size {size} needs {expected} weights, got {actual}")]
    KernelShapeMismatch {
        size: u32,
        expected: usize,
        actual: usize,
    },

    /// Center weight is below the user-facing minimum
    #[error("Center weight must be at least {minimum}, got {center_weight}")]
    CenterWeightTooSmall { center_weight: i32, minimum: i32 },

    /// Normalization factor evaluates to zero
    ///
    /// The cross kernel divides by `center_weight - 4`, so a center weight
    /// of 4 would divide every weighted sum by zero.
    #[error("Normalization factor must be non-zero")]
    ZeroNormalizationFactor,

    /// Deriving the normalization factor overflows `i32`
    #[error("Center weight {center_weight} overflows the normalization factor")]
    CenterWeightOverflow { center_weight: i32 },
}

/// Error type for raw pixel buffer construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    /// Width or height is zero
    #[error("Pixel buffer dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    /// Byte length does not equal `width * height * 4`
    #[error("Pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// `width * height * 4` does not fit in memory addressing
    #[error("Pixel buffer of {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },
}

/// Top-level error type for sharpening operations
///
/// Wraps configuration and buffer errors and carries the underlying
/// `image` crate error for decode and encode failures.
#[derive(Debug, Error)]
pub enum SharpenError {
    /// Input bytes are not a valid or supported image
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// Input is a malformed data URL
    #[error("Malformed data URL: {0}")]
    DataUrl(String),

    /// Output image could not be encoded
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// Kernel or filter configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    /// Raw pixel data does not satisfy the buffer contract
    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(#[from] PixelBufferError),

    /// Sharpening was requested before any image was loaded
    #[error("No image loaded")]
    NoImageLoaded,
}

/// Result alias used throughout the crate
pub type Result<T, E = SharpenError> = std::result::Result<T, E>;
