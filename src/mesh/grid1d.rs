//! Uniform periodic 1D grid.
//!
//! A periodic grid samples the half-open interval [0, L) at N equally spaced
//! points. The point x = L is never stored: it coincides with x_0 one period
//! later, so the point after x_{N-1} is x_0.

use crate::error::{AdvectionError, Result};

use super::periodic::{wrap_left, wrap_right};

/// Periodic grid of equally spaced sample points on [0, L).
///
/// Built once per resolution and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicGrid1D {
    /// Domain length L
    length: f64,
    /// Grid spacing dx = L / N
    dx: f64,
    /// Coordinates x_j = j * L / N, j = 0..N-1
    coordinates: Vec<f64>,
}

impl PeriodicGrid1D {
    /// Smallest grid the stencils can address: they reach two points back.
    pub const MIN_POINTS: usize = 3;

    /// Create a uniform periodic grid of `n_points` samples on [0, length).
    ///
    /// # Errors
    ///
    /// - [`AdvectionError::InvalidGridSize`] if `n_points < 3`
    /// - [`AdvectionError::InvalidDomainLength`] if `length` is not positive and finite
    pub fn uniform(length: f64, n_points: usize) -> Result<Self> {
        if n_points < Self::MIN_POINTS {
            return Err(AdvectionError::InvalidGridSize {
                n: n_points,
                min: Self::MIN_POINTS,
            });
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(AdvectionError::InvalidDomainLength { length });
        }

        let dx = length / n_points as f64;

        let coordinates = (0..n_points).map(|j| j as f64 * dx).collect();

        Ok(Self {
            length,
            dx,
            coordinates,
        })
    }

    /// Domain length L.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Grid spacing dx = L / N.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of grid points N.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.coordinates.len()
    }

    /// Grid coordinates x_0 .. x_{N-1}.
    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Coordinate of point j.
    #[inline]
    pub fn x(&self, j: usize) -> f64 {
        self.coordinates[j]
    }

    /// Periodic neighbors (left, right) of point j.
    ///
    /// Point 0's left neighbor is N-1 and point N-1's right neighbor is 0.
    pub fn neighbors(&self, j: usize) -> (usize, usize) {
        let n = self.n_points();
        (wrap_left(j, 1, n), wrap_right(j, 1, n))
    }

    /// Evaluate `f` at every grid point.
    pub fn sample<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.coordinates.iter().map(|&x| f(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_grid_coordinates() {
        let grid = PeriodicGrid1D::uniform(3.0, 6).unwrap();

        assert_eq!(grid.n_points(), 6);
        assert_relative_eq!(grid.dx(), 0.5, epsilon = 1e-15);

        let expected = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
        for (x, e) in grid.coordinates().iter().zip(expected.iter()) {
            assert_relative_eq!(*x, *e, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_endpoint_excluded() {
        let grid = PeriodicGrid1D::uniform(3.0, 100).unwrap();
        let last = *grid.coordinates().last().unwrap();

        assert!(last < 3.0);
        assert_relative_eq!(last + grid.dx(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_small_grids() {
        for n in 0..3 {
            let err = PeriodicGrid1D::uniform(1.0, n).unwrap_err();
            assert!(matches!(
                err,
                AdvectionError::InvalidGridSize { n: got, min: 3 } if got == n
            ));
        }
        assert!(PeriodicGrid1D::uniform(1.0, 3).is_ok());
    }

    #[test]
    fn test_rejects_bad_length() {
        for length in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = PeriodicGrid1D::uniform(length, 10).unwrap_err();
            assert!(matches!(err, AdvectionError::InvalidDomainLength { .. }));
        }
    }

    #[test]
    fn test_periodic_neighbors() {
        let grid = PeriodicGrid1D::uniform(1.0, 4).unwrap();

        assert_eq!(grid.neighbors(0), (3, 1));
        assert_eq!(grid.neighbors(1), (0, 2));
        assert_eq!(grid.neighbors(3), (2, 0));
    }

    #[test]
    fn test_sample() {
        let grid = PeriodicGrid1D::uniform(2.0, 4).unwrap();
        let values = grid.sample(|x| 2.0 * x);

        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
