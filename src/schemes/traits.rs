//! Trait-based finite-difference scheme abstraction.
//!
//! Every scheme is an explicit one-step update that reads a stencil of the
//! old field around point j and writes u_next[j]. Schemes never write into
//! the field they read: callers supply a separate output buffer.
//!
//! # Example
//! ```
//! use fd_advection::schemes::{FiniteDifferenceScheme, FirstOrderUpwind, StandardScheme};
//! use fd_advection::solver::Field1D;
//!
//! let u = Field1D::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
//!
//! // Using concrete type
//! let next = FirstOrderUpwind.step(&u, 0.5).unwrap();
//! assert_eq!(next.as_slice(), &[2.5, 1.5, 2.5, 3.5]);
//!
//! // Using trait object
//! let scheme: &dyn FiniteDifferenceScheme = &StandardScheme::FirstOrderUpwind;
//! assert_eq!(scheme.step(&u, 0.5).unwrap(), next);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{AdvectionError, Result};
use crate::mesh::{wrap_left, wrap_right};
use crate::solver::Field1D;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{LaxFriedrichs, FirstOrderUpwind, SecondOrderUpwind};

// =============================================================================
// Stencil Values
// =============================================================================

/// Old-field values around point j, gathered with periodic wrap.
///
/// `left2` is u[j-2], `left` is u[j-1], `center` is u[j], `right` is u[j+1],
/// with indices taken modulo N.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StencilValues {
    pub left2: f64,
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl StencilValues {
    /// Gather the stencil around point `j` of `u`.
    ///
    /// Indices wrap modulo `u.len()`. On fields shorter than the stencil the
    /// offsets alias (on two points u[j-2] is u[j]); the schemes reject such
    /// fields through [`FiniteDifferenceScheme::check_len`] before gathering.
    ///
    /// # Panics
    ///
    /// Panics if `j >= u.len()`.
    #[inline]
    pub fn gather(u: &[f64], j: usize) -> Self {
        let n = u.len();
        Self {
            left2: u[wrap_left(j, 2, n)],
            left: u[wrap_left(j, 1, n)],
            center: u[j],
            right: u[wrap_right(j, 1, n)],
        }
    }
}

// =============================================================================
// Scheme Trait
// =============================================================================

/// Explicit finite-difference scheme for ∂u/∂t + ∂u/∂x = 0.
///
/// # Implementation Notes
///
/// - `update` must only read from the stencil it is given
/// - Schemes should be consistent: a constant field stays constant
/// - The provided sweep methods validate lengths before touching any value
///
/// # Extending
///
/// To add a new scheme:
/// 1. Create a struct (can be zero-sized if no parameters)
/// 2. Implement `FiniteDifferenceScheme` for it
/// 3. Optionally add it to `StandardScheme` for enum dispatch
pub trait FiniteDifferenceScheme: Send + Sync {
    /// Compute u_next[j] from the old-field stencil around j.
    fn update(&self, s: &StencilValues, cfl: f64) -> f64;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Largest Courant number for which the scheme is stable.
    fn max_stable_cfl(&self) -> f64;

    /// Recommended Courant number for convergence studies.
    fn recommended_cfl(&self) -> f64 {
        0.8
    }

    /// Formal order of accuracy of the spatial stencil.
    fn spatial_order(&self) -> usize {
        1
    }

    /// Minimum field length the stencil needs.
    fn min_points(&self) -> usize {
        3
    }

    /// Reject Courant numbers outside `[0, max_stable_cfl]`, NaN and
    /// infinities included.
    ///
    /// Zero passes: a zero-CFL step is the identity.
    fn check_cfl(&self, cfl: f64) -> Result<()> {
        let max = self.max_stable_cfl();
        if !cfl.is_finite() || !(0.0..=max).contains(&cfl) {
            return Err(AdvectionError::UnstableCfl {
                scheme: self.name(),
                cfl,
                max,
            });
        }
        Ok(())
    }

    /// Reject fields shorter than the stencil.
    fn check_len(&self, len: usize) -> Result<()> {
        let min = self.min_points();
        if len < min {
            return Err(AdvectionError::InvalidFieldLength {
                scheme: self.name(),
                len,
                min,
            });
        }
        Ok(())
    }

    /// Write one step of `u` into `out`.
    ///
    /// Every `out[j]` is computed from `u` alone, so all points advance
    /// simultaneously from the same time level.
    fn step_into(&self, u: &[f64], cfl: f64, out: &mut [f64]) -> Result<()> {
        self.check_len(u.len())?;
        if out.len() != u.len() {
            return Err(AdvectionError::LengthMismatch {
                expected: u.len(),
                actual: out.len(),
            });
        }

        for (j, v) in out.iter_mut().enumerate() {
            *v = self.update(&StencilValues::gather(u, j), cfl);
        }
        Ok(())
    }

    /// Rayon-parallel version of [`step_into`](Self::step_into).
    ///
    /// Produces bit-identical results: each point still reads only `u`.
    #[cfg(feature = "parallel")]
    fn step_into_parallel(&self, u: &[f64], cfl: f64, out: &mut [f64]) -> Result<()> {
        self.check_len(u.len())?;
        if out.len() != u.len() {
            return Err(AdvectionError::LengthMismatch {
                expected: u.len(),
                actual: out.len(),
            });
        }

        out.par_iter_mut().enumerate().for_each(|(j, v)| {
            *v = self.update(&StencilValues::gather(u, j), cfl);
        });
        Ok(())
    }

    /// Advance `u` by one step into a newly allocated field.
    fn step(&self, u: &Field1D, cfl: f64) -> Result<Field1D> {
        let mut next = Field1D::zeros(u.len());
        self.step_into(u.as_slice(), cfl, next.as_mut_slice())?;
        Ok(next)
    }
}

// =============================================================================
// Standard Scheme Enum
// =============================================================================

/// Enum wrapper for the built-in schemes.
///
/// Selected once (for instance parsed from a name) and dispatched by `match`
/// from then on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StandardScheme {
    /// Lax-Friedrichs (centered, dissipative)
    LaxFriedrichs,
    /// First-order upwind
    #[default]
    FirstOrderUpwind,
    /// Second-order upwind (tighter stability bound)
    SecondOrderUpwind,
}

impl StandardScheme {
    /// All built-in schemes, in reporting order.
    pub const ALL: [StandardScheme; 3] = [
        StandardScheme::LaxFriedrichs,
        StandardScheme::FirstOrderUpwind,
        StandardScheme::SecondOrderUpwind,
    ];

    /// Short label used in reports ("LF", "Fous", "Sous").
    pub fn short_name(&self) -> &'static str {
        match self {
            StandardScheme::LaxFriedrichs => "LF",
            StandardScheme::FirstOrderUpwind => "Fous",
            StandardScheme::SecondOrderUpwind => "Sous",
        }
    }
}

impl FiniteDifferenceScheme for StandardScheme {
    #[inline]
    fn update(&self, s: &StencilValues, cfl: f64) -> f64 {
        match self {
            StandardScheme::LaxFriedrichs => LaxFriedrichs.update(s, cfl),
            StandardScheme::FirstOrderUpwind => FirstOrderUpwind.update(s, cfl),
            StandardScheme::SecondOrderUpwind => SecondOrderUpwind.update(s, cfl),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StandardScheme::LaxFriedrichs => LaxFriedrichs.name(),
            StandardScheme::FirstOrderUpwind => FirstOrderUpwind.name(),
            StandardScheme::SecondOrderUpwind => SecondOrderUpwind.name(),
        }
    }

    fn max_stable_cfl(&self) -> f64 {
        match self {
            StandardScheme::LaxFriedrichs => LaxFriedrichs.max_stable_cfl(),
            StandardScheme::FirstOrderUpwind => FirstOrderUpwind.max_stable_cfl(),
            StandardScheme::SecondOrderUpwind => SecondOrderUpwind.max_stable_cfl(),
        }
    }

    fn recommended_cfl(&self) -> f64 {
        match self {
            StandardScheme::LaxFriedrichs => LaxFriedrichs.recommended_cfl(),
            StandardScheme::FirstOrderUpwind => FirstOrderUpwind.recommended_cfl(),
            StandardScheme::SecondOrderUpwind => SecondOrderUpwind.recommended_cfl(),
        }
    }

    fn spatial_order(&self) -> usize {
        match self {
            StandardScheme::LaxFriedrichs => LaxFriedrichs.spatial_order(),
            StandardScheme::FirstOrderUpwind => FirstOrderUpwind.spatial_order(),
            StandardScheme::SecondOrderUpwind => SecondOrderUpwind.spatial_order(),
        }
    }
}

impl fmt::Display for StandardScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized scheme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown scheme: {0} (expected LF, Fous, Sous or a full scheme name)")]
pub struct ParseSchemeError(pub String);

impl FromStr for StandardScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "lf" | "lax-friedrichs" | "laxfriedrichs" => Ok(StandardScheme::LaxFriedrichs),
            "fous" | "first-order-upwind" | "upwind1" => Ok(StandardScheme::FirstOrderUpwind),
            "sous" | "second-order-upwind" | "upwind2" => Ok(StandardScheme::SecondOrderUpwind),
            _ => Err(ParseSchemeError(s.to_string())),
        }
    }
}

// =============================================================================
// Boxed Scheme (Runtime Polymorphism)
// =============================================================================

/// Type alias for boxed scheme (runtime polymorphism).
pub type BoxedScheme = Box<dyn FiniteDifferenceScheme>;

/// Create a boxed scheme from the enum.
pub fn create_scheme(scheme: StandardScheme) -> BoxedScheme {
    match scheme {
        StandardScheme::LaxFriedrichs => Box::new(LaxFriedrichs),
        StandardScheme::FirstOrderUpwind => Box::new(FirstOrderUpwind),
        StandardScheme::SecondOrderUpwind => Box::new(SecondOrderUpwind),
    }
}
