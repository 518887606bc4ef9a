use crate::error::ConfigurationError;
use crate::imageops_sharpen::kernel::Kernel;
use log::debug;
use std::num::NonZeroI32;

/// Number of weighted neighbors in the cross kernel
pub const CROSS_NEIGHBORS: i32 = 4;

/// Non-zero divisor applied to every weighted sum before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizationFactor(NonZeroI32);

impl NormalizationFactor {
    /// Divides by one, leaving weighted sums as they are
    pub const IDENTITY: Self = match NonZeroI32::new(1) {
        Some(one) => Self(one),
        None => unreachable!(),
    };

    /// # Errors
    ///
    /// `ConfigurationError::ZeroNormalizationFactor` if `value` is zero.
    pub fn new(value: i32) -> Result<Self, ConfigurationError> {
        NonZeroI32::new(value)
            .map(Self)
            .ok_or(ConfigurationError::ZeroNormalizationFactor)
    }

    pub fn get(self) -> i32 {
        self.0.get()
    }
}

impl Default for NormalizationFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<i32> for NormalizationFactor {
    type Error = ConfigurationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Selectable sharpening kernel shape together with its normalization
///
/// The two shapes normalize differently and are kept apart rather than
/// unified:
///
/// * `Square` - every neighbor weighs `-1`, the sum is divided by 1
/// * `Cross` - only the four orthogonal neighbors weigh `-1`, the sum is
///   divided by `center_weight - 4`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelStrategy {
    Square { size: u32, center_weight: i32 },
    Cross { center_weight: i32 },
}

impl KernelStrategy {
    /// Builds the kernel and the matching normalization factor
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::InvalidKernelSize` - square size is zero
    /// * `ConfigurationError::ZeroNormalizationFactor` - cross center weight is 4
    /// * `ConfigurationError::CenterWeightOverflow` - `center_weight - 4` overflows
    pub fn build(&self) -> Result<(Kernel, NormalizationFactor), ConfigurationError> {
        let factor = self.normalization_factor()?;
        let kernel = match *self {
            Self::Square {
                size,
                center_weight,
            } => Kernel::sharpen_square(size, center_weight)?,
            Self::Cross { center_weight } => Kernel::sharpen_cross(center_weight),
        };
        debug!(
            "built {:?} kernel: size={}, factor={}",
            self,
            kernel.size(),
            factor.get()
        );
        Ok((kernel, factor))
    }

    /// Normalization factor without building the kernel
    pub fn normalization_factor(&self) -> Result<NormalizationFactor, ConfigurationError> {
        match *self {
            Self::Square { .. } => Ok(NormalizationFactor::IDENTITY),
            Self::Cross { center_weight } => {
                let value = center_weight
                    .checked_sub(CROSS_NEIGHBORS)
                    .ok_or(ConfigurationError::CenterWeightOverflow { center_weight })?;
                NormalizationFactor::new(value)
            }
        }
    }

    pub fn kernel_size(&self) -> u32 {
        match *self {
            Self::Square { size, .. } => size,
            Self::Cross { .. } => 3,
        }
    }

    pub fn center_weight(&self) -> i32 {
        match *self {
            Self::Square { center_weight, .. } | Self::Cross { center_weight } => center_weight,
        }
    }
}
