//! Explicit time marching.
//!
//! The driver owns two buffers of equal length. Each step reads only the
//! current buffer and writes only the next one, then the two swap roles, so
//! no point ever sees a value from the level it is computing.

use tracing::debug;

use crate::equations::Advection1D;
use crate::error::{AdvectionError, Result};
use crate::schemes::FiniteDifferenceScheme;
use crate::solver::Field1D;

/// Relative distance below an integer within which a step ratio counts as
/// that integer. Absorbs the rounding in t / (CFL·dx) without changing the
/// result for ratios that are genuinely fractional.
pub const STEP_SNAP_TOLERANCE: f64 = 1e-9;

/// How `t / dt` is turned into a whole number of steps.
///
/// All policies evaluate the solution at the requested final time, so any
/// difference between `n_steps * dt` and `t` shows up as error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepRounding {
    /// Largest whole number of steps that does not pass the final time,
    /// counting ratios a hair below an integer (such as 374.99999999999994
    /// from 1 / (0.8 · 3/900)) as that integer.
    #[default]
    SnappedFloor,
    /// Plain truncation of the floating-point ratio; 374.99999999999994
    /// gives 374 steps.
    Floor,
    /// Nearest whole number of steps, ties away from zero.
    Nearest,
}

/// Number of steps of size `CFL·dx` needed to reach `final_time`.
///
/// # Errors
///
/// [`AdvectionError::NonPositiveTimeStep`] if `final_time`, `cfl` or `dx` is
/// not positive and finite, or if the rounded step count is zero.
pub fn compute_n_steps(
    final_time: f64,
    dx: f64,
    cfl: f64,
    rounding: StepRounding,
) -> Result<usize> {
    let dt = Advection1D::time_step(cfl, dx);
    let valid = final_time.is_finite() && final_time > 0.0 && dt.is_finite() && dt > 0.0;
    if !valid {
        return Err(AdvectionError::NonPositiveTimeStep { final_time, cfl });
    }

    let ratio = final_time / dt;
    let n = match rounding {
        StepRounding::SnappedFloor => {
            let below = ratio.floor();
            let above = below + 1.0;
            if above - ratio <= STEP_SNAP_TOLERANCE * ratio {
                above
            } else {
                below
            }
        }
        StepRounding::Floor => ratio.floor(),
        StepRounding::Nearest => ratio.round(),
    };

    if n < 1.0 {
        return Err(AdvectionError::NonPositiveTimeStep { final_time, cfl });
    }

    Ok(n as usize)
}

/// Advance `initial` by `n_steps` applications of `scheme`.
///
/// The step count is taken as given; see [`compute_n_steps`] for deriving it.
/// Zero steps return the initial field unchanged.
///
/// # Errors
///
/// - [`AdvectionError::UnstableCfl`] if `cfl` is negative, not finite or exceeds the scheme's bound
/// - [`AdvectionError::InvalidFieldLength`] if the field is shorter than the stencil
/// - [`AdvectionError::NonFiniteSolution`] if the final field holds NaN or Inf
pub fn march<S>(initial: Field1D, scheme: &S, cfl: f64, n_steps: usize) -> Result<Field1D>
where
    S: FiniteDifferenceScheme + ?Sized,
{
    scheme.check_cfl(cfl)?;
    scheme.check_len(initial.len())?;

    debug!(
        scheme = scheme.name(),
        cfl,
        n_steps,
        n_points = initial.len(),
        "marching"
    );

    let mut current = initial;
    let mut next = Field1D::zeros(current.len());

    for _ in 0..n_steps {
        scheme.step_into(current.as_slice(), cfl, next.as_mut_slice())?;
        std::mem::swap(&mut current, &mut next);
    }

    if n_steps > 0 && !current.is_finite() {
        return Err(AdvectionError::NonFiniteSolution { step: n_steps });
    }

    debug!(scheme = scheme.name(), max_abs = current.max_abs(), "march complete");

    Ok(current)
}

/// Like [`march`], calling `observer(step, &field)` after every step.
///
/// `step` counts from 1. The observer only borrows the field for the duration
/// of the call. Each level is checked for NaN/Inf, so a blow-up stops the
/// march at the first step that produces one.
pub fn march_observed<S, F>(
    initial: Field1D,
    scheme: &S,
    cfl: f64,
    n_steps: usize,
    mut observer: F,
) -> Result<Field1D>
where
    S: FiniteDifferenceScheme + ?Sized,
    F: FnMut(usize, &Field1D),
{
    scheme.check_cfl(cfl)?;
    scheme.check_len(initial.len())?;

    let mut current = initial;
    let mut next = Field1D::zeros(current.len());

    for step in 1..=n_steps {
        scheme.step_into(current.as_slice(), cfl, next.as_mut_slice())?;
        std::mem::swap(&mut current, &mut next);

        if !current.is_finite() {
            return Err(AdvectionError::NonFiniteSolution { step });
        }
        observer(step, &current);
    }

    Ok(current)
}

/// Parallel version of [`march`] using rayon within each step.
///
/// Every step still finishes completely before the next one starts, and the
/// result is bit-identical to the serial march.
#[cfg(feature = "parallel")]
pub fn march_parallel<S>(initial: Field1D, scheme: &S, cfl: f64, n_steps: usize) -> Result<Field1D>
where
    S: FiniteDifferenceScheme + ?Sized,
{
    scheme.check_cfl(cfl)?;
    scheme.check_len(initial.len())?;

    debug!(
        scheme = scheme.name(),
        cfl,
        n_steps,
        n_points = initial.len(),
        "marching (parallel)"
    );

    let mut current = initial;
    let mut next = Field1D::zeros(current.len());

    for _ in 0..n_steps {
        scheme.step_into_parallel(current.as_slice(), cfl, next.as_mut_slice())?;
        std::mem::swap(&mut current, &mut next);
    }

    if n_steps > 0 && !current.is_finite() {
        return Err(AdvectionError::NonFiniteSolution { step: n_steps });
    }

    Ok(current)
}
