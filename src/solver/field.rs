//! Scalar field storage on a periodic 1D grid.

use crate::error::{AdvectionError, Result};
use crate::mesh::PeriodicGrid1D;

/// Values of u at a single time level, one per grid point.
///
/// Index j holds u(x_j). The field carries no grid of its own; its length is
/// checked against the grid wherever the two meet.
#[derive(Clone, Debug, PartialEq)]
pub struct Field1D {
    /// Point values, data[j] = u(x_j)
    pub data: Vec<f64>,
}

impl Field1D {
    /// Create a field of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// Wrap existing point values.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Sample `f(x)` at every point of `grid`.
    pub fn from_function<F>(grid: &PeriodicGrid1D, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            data: grid.sample(f),
        }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Point values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable point values.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the field, returning its values.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Whether every value is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Get maximum absolute value.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().map(|&x| x.abs()).fold(0.0, f64::max)
    }

    /// Sum of values times dx: the discrete integral over one period.
    pub fn integrate(&self, grid: &PeriodicGrid1D) -> f64 {
        self.data.iter().sum::<f64>() * grid.dx()
    }

    /// Pair each value with its grid coordinate, for plotting.
    ///
    /// # Errors
    ///
    /// [`AdvectionError::LengthMismatch`] if the field and grid differ in length.
    pub fn profile(&self, grid: &PeriodicGrid1D) -> Result<Vec<(f64, f64)>> {
        if self.len() != grid.n_points() {
            return Err(AdvectionError::LengthMismatch {
                expected: grid.n_points(),
                actual: self.len(),
            });
        }
        Ok(grid
            .coordinates()
            .iter()
            .copied()
            .zip(self.data.iter().copied())
            .collect())
    }
}

impl From<Vec<f64>> for Field1D {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

impl AsRef<[f64]> for Field1D {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}
