use crate::error::ConfigurationError;
use crate::imageops_sharpen::strategy::KernelStrategy;
use log::{debug, warn};
use std::ops::RangeInclusive;

/// Kernel sizes offered for the square shape
pub const SUPPORTED_KERNEL_SIZES: [u32; 3] = [3, 5, 7];

/// Center weights offered to the user; only the lower bound is enforced
pub const CENTER_WEIGHT_RANGE: RangeInclusive<i32> = 1..=99;

pub const DEFAULT_KERNEL_SIZE: u32 = 3;
pub const DEFAULT_CENTER_WEIGHT: i32 = 5;

/// Kernel shape selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelShape {
    /// All neighbors weigh `-1`, size is configurable
    #[default]
    Square,
    /// Fixed 3×3 plus shape normalized by `center_weight - 4`
    Cross,
}

/// User-facing filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Side length of the square kernel; ignored by the cross shape
    pub kernel_size: u32,
    pub center_weight: i32,
    pub shape: KernelShape,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            center_weight: DEFAULT_CENTER_WEIGHT,
            shape: KernelShape::Square,
        }
    }
}

impl FilterConfig {
    pub fn square(kernel_size: u32, center_weight: i32) -> Self {
        Self {
            kernel_size,
            center_weight,
            shape: KernelShape::Square,
        }
    }

    pub fn cross(center_weight: i32) -> Self {
        Self {
            kernel_size: 3,
            center_weight,
            shape: KernelShape::Cross,
        }
    }

    #[must_use]
    pub fn with_kernel_size(mut self, kernel_size: u32) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    #[must_use]
    pub fn with_center_weight(mut self, center_weight: i32) -> Self {
        self.center_weight = center_weight;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: KernelShape) -> Self {
        self.shape = shape;
        self
    }

    /// Checks the settings against the user-facing contract
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::InvalidKernelSize` - square kernel size is zero
    /// * `ConfigurationError::CenterWeightTooSmall` - center weight below 1
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.shape == KernelShape::Square && self.kernel_size == 0 {
            return Err(ConfigurationError::InvalidKernelSize {
                size: self.kernel_size,
            });
        }
        let minimum = *CENTER_WEIGHT_RANGE.start();
        if self.center_weight < minimum {
            return Err(ConfigurationError::CenterWeightTooSmall {
                center_weight: self.center_weight,
                minimum,
            });
        }
        Ok(())
    }

    /// Validates the settings and maps them to a kernel strategy
    pub fn strategy(&self) -> Result<KernelStrategy, ConfigurationError> {
        if let Err(err) = self.validate() {
            warn!("rejected filter configuration {:?}: {}", self, err);
            return Err(err);
        }
        let strategy = match self.shape {
            KernelShape::Square => KernelStrategy::Square {
                size: self.kernel_size,
                center_weight: self.center_weight,
            },
            KernelShape::Cross => {
                if self.kernel_size != 3 {
                    debug!(
                        "cross kernel is fixed at 3x3, ignoring kernel_size={}",
                        self.kernel_size
                    );
                }
                KernelStrategy::Cross {
                    center_weight: self.center_weight,
                }
            }
        };
        Ok(strategy)
    }
}
