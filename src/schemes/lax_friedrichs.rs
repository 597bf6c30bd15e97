//! Lax-Friedrichs scheme for linear advection.
//!
//! Replaces u_j in the unstable forward-time centered-space update by the
//! average of its neighbors:
//!
//! u_j^{n+1} = (u_{j+1} + u_{j-1})/2 - (CFL/2) (u_{j+1} - u_{j-1})
//!           = 0.5 (1 - CFL) u_{j+1} + 0.5 (1 + CFL) u_{j-1}
//!
//! The averaging adds numerical diffusion of order dx²/dt, which keeps the
//! scheme stable for |CFL| <= 1 but limits it to first-order accuracy when
//! dt is proportional to dx.

use super::traits::{FiniteDifferenceScheme, StencilValues};

/// Lax-Friedrichs scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaxFriedrichs;

impl FiniteDifferenceScheme for LaxFriedrichs {
    #[inline]
    fn update(&self, s: &StencilValues, cfl: f64) -> f64 {
        0.5 * (1.0 - cfl) * s.right + 0.5 * (1.0 + cfl) * s.left
    }

    fn name(&self) -> &'static str {
        "lax-friedrichs"
    }

    fn max_stable_cfl(&self) -> f64 {
        1.0
    }
}
