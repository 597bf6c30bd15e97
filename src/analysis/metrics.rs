//! Error metrics and order-of-accuracy estimates.
//!
//! The discretization error of a run is measured pointwise against the exact
//! solution sampled on the same grid. The order of accuracy is the slope of
//! ln(error) against ln(dx) across a sequence of grids.

use crate::error::{AdvectionError, Result};

/// Pointwise comparison between a numerical and an exact field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorMetrics {
    /// Root mean square error: sqrt(mean((numeric - exact)²))
    pub l2: f64,
    /// Maximum absolute error: max(|numeric - exact|)
    pub linf: f64,
    /// Mean absolute error: mean(|numeric - exact|)
    pub mae: f64,
    /// Number of points compared
    pub n_points: usize,
}

impl ErrorMetrics {
    /// Compare `numeric` against `exact`.
    ///
    /// # Errors
    ///
    /// [`AdvectionError::LengthMismatch`] if the slices differ in length or
    /// are empty.
    pub fn compute(numeric: &[f64], exact: &[f64]) -> Result<Self> {
        if numeric.len() != exact.len() || numeric.is_empty() {
            return Err(AdvectionError::LengthMismatch {
                expected: exact.len(),
                actual: numeric.len(),
            });
        }

        let n = numeric.len() as f64;
        let mut sum_sq = 0.0;
        let mut sum_abs = 0.0;
        let mut linf: f64 = 0.0;

        for (&u, &e) in numeric.iter().zip(exact) {
            let diff = u - e;
            sum_sq += diff * diff;
            sum_abs += diff.abs();
            linf = linf.max(diff.abs());
        }

        Ok(Self {
            l2: (sum_sq / n).sqrt(),
            linf,
            mae: sum_abs / n,
            n_points: numeric.len(),
        })
    }
}

/// Root-mean-square difference between `numeric` and `exact`.
pub fn l2_error(numeric: &[f64], exact: &[f64]) -> Result<f64> {
    ErrorMetrics::compute(numeric, exact).map(|m| m.l2)
}

/// Maximum absolute difference between `numeric` and `exact`.
pub fn linf_error(numeric: &[f64], exact: &[f64]) -> Result<f64> {
    ErrorMetrics::compute(numeric, exact).map(|m| m.linf)
}

/// Least-squares slope of ln(error) against ln(dx).
///
/// `points` are (dx, error) pairs. Returns `None` with fewer than two usable
/// points (both coordinates positive and finite) or when every dx is equal.
pub fn log_log_slope(points: &[(f64, f64)]) -> Option<f64> {
    let logs: Vec<(f64, f64)> = points
        .iter()
        .filter(|(dx, err)| dx.is_finite() && *dx > 0.0 && err.is_finite() && *err > 0.0)
        .map(|(dx, err)| (dx.ln(), err.ln()))
        .collect();

    if logs.len() < 2 {
        return None;
    }

    let n = logs.len() as f64;
    let mean_x = logs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = logs.iter().map(|p| p.1).sum::<f64>() / n;

    let sxx: f64 = logs.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    let sxy: f64 = logs.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();

    if sxx <= f64::EPSILON {
        return None;
    }

    Some(sxy / sxx)
}

/// Order observed between each pair of consecutive (dx, error) points:
/// ln(e_i / e_{i+1}) / ln(dx_i / dx_{i+1}).
///
/// Pairs with a non-positive value or equal spacings give NaN.
pub fn observed_orders(points: &[(f64, f64)]) -> Vec<f64> {
    points
        .windows(2)
        .map(|w| {
            let (dx_c, err_c) = w[0];
            let (dx_f, err_f) = w[1];
            if dx_c > 0.0 && dx_f > 0.0 && err_c > 0.0 && err_f > 0.0 && dx_c != dx_f {
                (err_c / err_f).ln() / (dx_c / dx_f).ln()
            } else {
                f64::NAN
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_perfect_match() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let metrics = ErrorMetrics::compute(&data, &data).unwrap();

        assert!(metrics.l2.abs() < TOL);
        assert!(metrics.linf.abs() < TOL);
        assert!(metrics.mae.abs() < TOL);
        assert_eq!(metrics.n_points, 5);
    }

    #[test]
    fn test_constant_offset() {
        let exact = vec![1.0, 2.0, 3.0, 4.0];
        let numeric: Vec<f64> = exact.iter().map(|&x| x + 0.5).collect();

        assert_relative_eq!(l2_error(&numeric, &exact).unwrap(), 0.5, epsilon = TOL);
        assert_relative_eq!(linf_error(&numeric, &exact).unwrap(), 0.5, epsilon = TOL);
    }

    #[test]
    fn test_rms_not_sum() {
        // errors (3, 4, 0, 0): sum of squares 25, mean 6.25, rms 2.5
        let numeric = [3.0, 4.0, 0.0, 0.0];
        let exact = [0.0; 4];
        let m = ErrorMetrics::compute(&numeric, &exact).unwrap();

        assert_relative_eq!(m.l2, 2.5, epsilon = TOL);
        assert_relative_eq!(m.linf, 4.0, epsilon = TOL);
        assert_relative_eq!(m.mae, 1.75, epsilon = TOL);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            l2_error(&[1.0, 2.0], &[1.0]),
            Err(AdvectionError::LengthMismatch {
                expected: 1,
                actual: 2
            })
        ));
        assert!(l2_error(&[], &[]).is_err());
    }

    #[test]
    fn test_log_log_slope_exact_power_law() {
        let first: Vec<(f64, f64)> = [0.1, 0.05, 0.025, 0.0125]
            .iter()
            .map(|&dx| (dx, 3.0 * dx))
            .collect();
        let second: Vec<(f64, f64)> = [0.1, 0.05, 0.025, 0.0125]
            .iter()
            .map(|&dx| (dx, 0.7 * dx * dx))
            .collect();

        assert_relative_eq!(log_log_slope(&first).unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(log_log_slope(&second).unwrap(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_log_log_slope_degenerate() {
        assert!(log_log_slope(&[]).is_none());
        assert!(log_log_slope(&[(0.1, 0.2)]).is_none());
        assert!(log_log_slope(&[(0.1, 0.2), (0.1, 0.3)]).is_none());
        // zero error cannot be placed on log axes
        assert!(log_log_slope(&[(0.1, 0.0), (0.05, 0.0)]).is_none());
    }

    #[test]
    fn test_observed_orders() {
        let points = [(0.1, 0.01), (0.05, 0.0025), (0.025, 0.000625)];
        let orders = observed_orders(&points);

        assert_eq!(orders.len(), 2);
        for p in orders {
            assert_relative_eq!(p, 2.0, epsilon = 1e-10);
        }

        assert!(observed_orders(&[(0.1, 0.0), (0.05, 0.1)])[0].is_nan());
        assert!(observed_orders(&[(0.1, 0.1)]).is_empty());
    }
}
