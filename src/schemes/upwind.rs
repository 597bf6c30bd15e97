//! Upwind schemes for linear advection.
//!
//! With positive wave speed information arrives from the left, so both
//! schemes difference toward lower indices:
//!
//! First order:  u_j^{n+1} = u_j - CFL (u_j - u_{j-1})
//! Second order: u_j^{n+1} = u_j - (CFL/2) (3u_j - 4u_{j-1} + u_{j-2})
//!
//! The second-order stencil is a one-sided second-order approximation of
//! du/dx, but paired with a forward Euler step it has a narrower stability
//! range than the first-order scheme.

use super::traits::{FiniteDifferenceScheme, StencilValues};

/// First-order upwind scheme.
///
/// Stable for 0 <= CFL <= 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOrderUpwind;

impl FiniteDifferenceScheme for FirstOrderUpwind {
    #[inline]
    fn update(&self, s: &StencilValues, cfl: f64) -> f64 {
        s.center - cfl * (s.center - s.left)
    }

    fn name(&self) -> &'static str {
        "first-order-upwind"
    }

    fn max_stable_cfl(&self) -> f64 {
        1.0
    }
}

/// Second-order upwind scheme.
///
/// Reaches two points back; stable for 0 <= CFL <= 0.5.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondOrderUpwind;

impl FiniteDifferenceScheme for SecondOrderUpwind {
    #[inline]
    fn update(&self, s: &StencilValues, cfl: f64) -> f64 {
        s.center - 0.5 * cfl * (3.0 * s.center - 4.0 * s.left + s.left2)
    }

    fn name(&self) -> &'static str {
        "second-order-upwind"
    }

    fn max_stable_cfl(&self) -> f64 {
        0.5
    }

    fn recommended_cfl(&self) -> f64 {
        0.4
    }

    fn spatial_order(&self) -> usize {
        2
    }
}
