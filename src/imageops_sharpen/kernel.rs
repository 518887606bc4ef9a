use crate::error::ConfigurationError;
use itertools::iproduct;

/// Weight of every non-center cell in a sharpening kernel
pub const SIDE_WEIGHT: i32 = -1;

/// Square convolution kernel with integer weights
///
/// Weights are stored row-major. The center cell sits at `floor(size / 2)`
/// on both axes, so an even-sized kernel has its center shifted towards the
/// bottom-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    size: u32,
    weights: Vec<i32>,
}

impl Kernel {
    /// Creates a kernel from row-major weights
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::InvalidKernelSize` - `size` is zero
    /// * `ConfigurationError::KernelShapeMismatch` - `weights.len() != size * size`
    pub fn new(size: u32, weights: Vec<i32>) -> Result<Self, ConfigurationError> {
        let expected = cell_count(size)?;
        if weights.len() != expected {
            return Err(ConfigurationError::KernelShapeMismatch {
                size,
                expected,
                actual: weights.len(),
            });
        }
        Ok(Self { size, weights })
    }

    /// Creates a kernel from a list of equally long rows
    ///
    /// ```
    /// use imageops_sharpen::Kernel;
    ///
    /// let kernel = Kernel::from_rows(&[[0, -1, 0], [-1, 5, -1], [0, -1, 0]]).unwrap();
    /// assert_eq!(kernel, Kernel::sharpen_cross(5));
    /// ```
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, ConfigurationError> {
        let size = u32::try_from(rows.len())
            .map_err(|_| ConfigurationError::InvalidKernelSize { size: u32::MAX })?;
        let weights = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect::<Vec<_>>();
        if rows.iter().any(|row| row.as_ref().len() != rows.len()) {
            return Err(ConfigurationError::KernelShapeMismatch {
                size,
                expected: rows.len() * rows.len(),
                actual: weights.len(),
            });
        }
        Self::new(size, weights)
    }

    /// Builds a `size × size` sharpening kernel
    ///
    /// Every cell is `-1` except the center, which carries `center_weight`.
    /// Odd sizes are expected; even sizes are accepted and produce an
    /// off-center center cell.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::InvalidKernelSize` if `size` is zero.
    pub fn sharpen_square(size: u32, center_weight: i32) -> Result<Self, ConfigurationError> {
        cell_count(size)?;
        let offset = size / 2;
        let weights = iproduct!(0..size, 0..size)
            .map(|(y, x)| {
                if x == offset && y == offset {
                    center_weight
                } else {
                    SIDE_WEIGHT
                }
            })
            .collect();
        Ok(Self { size, weights })
    }

    /// Builds the 3×3 plus-shaped sharpening kernel
    ///
    /// Only the four orthogonal neighbors carry `-1`; the diagonal corners
    /// are `0`.
    pub fn sharpen_cross(center_weight: i32) -> Self {
        Self {
            size: 3,
            weights: vec![
                0,
                SIDE_WEIGHT,
                0,
                SIDE_WEIGHT,
                center_weight,
                SIDE_WEIGHT,
                0,
                SIDE_WEIGHT,
                0,
            ],
        }
    }

    /// Side length of the kernel
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Half-width of the neighborhood window, `floor(size / 2)`
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Coordinates of the center cell
    pub fn center(&self) -> (u32, u32) {
        (self.radius(), self.radius())
    }

    /// Weight at column `x`, row `y`
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not smaller than the kernel size.
    pub fn at(&self, x: u32, y: u32) -> i32 {
        assert!(x < self.size && y < self.size, "kernel cell out of bounds");
        self.weights[cell_index(self.size, x, y)]
    }

    /// Row-major weights
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Iterates over the kernel rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.weights.chunks_exact(self.size as usize)
    }

    /// Sum of all weights
    pub fn weight_sum(&self) -> i64 {
        self.weights.iter().map(|&w| i64::from(w)).sum()
    }
}

fn cell_count(size: u32) -> Result<usize, ConfigurationError> {
    if size == 0 {
        return Err(ConfigurationError::InvalidKernelSize { size });
    }
    (size as usize)
        .checked_mul(size as usize)
        .ok_or(ConfigurationError::InvalidKernelSize { size })
}

/// Row-major index of cell `(x, y)`, computed in `usize` so large kernels
/// cannot overflow `u32`
fn cell_index(size: u32, x: u32, y: u32) -> usize {
    y as usize * size as usize + x as usize
}
