//! Scalar advection equation.
//!
//! The 1D linear advection equation with unit wave speed:
//!
//! ∂u/∂t + ∂u/∂x = 0
//!
//! Any initial profile u0 is carried unchanged to the right:
//! u(x, t) = u0(x - t).

use std::f64::consts::PI;

use crate::mesh::PeriodicGrid1D;
use crate::solver::Field1D;

/// An analytic solution u(x, t) used to seed and check numerical runs.
pub trait ExactSolution: Send + Sync {
    /// Evaluate u at position `x` and time `t`.
    fn evaluate(&self, x: f64, t: f64) -> f64;

    /// Sample u(·, t) at every grid point.
    fn sample(&self, grid: &PeriodicGrid1D, t: f64) -> Field1D {
        Field1D::from_function(grid, |x| self.evaluate(x, t))
    }

    /// Initial condition u(x, 0).
    fn initial(&self, x: f64) -> f64 {
        self.evaluate(x, 0.0)
    }
}

/// 1D linear advection with unit wave speed.
///
/// du/dt + du/dx = 0
///
/// Positive speed carries information from the negative-index side, which
/// is the side the upwind schemes lean on.
#[derive(Clone, Copy, Debug, Default)]
pub struct Advection1D;

impl Advection1D {
    /// Advection velocity (positive = rightward).
    pub const VELOCITY: f64 = 1.0;

    /// Foot of the characteristic through (x, t).
    #[inline]
    pub fn characteristic_foot(x: f64, t: f64) -> f64 {
        x - Self::VELOCITY * t
    }

    /// Courant number for a time step `dt` on spacing `dx`.
    #[inline]
    pub fn courant_number(dt: f64, dx: f64) -> f64 {
        Self::VELOCITY.abs() * dt / dx
    }

    /// Time step that gives Courant number `cfl` on spacing `dx`.
    #[inline]
    pub fn time_step(cfl: f64, dx: f64) -> f64 {
        cfl * dx / Self::VELOCITY.abs()
    }
}

/// Traveling sine wave sin(2π(x - t)).
///
/// The exact solution for initial condition sin(2πx). Its period in x is 1,
/// so any domain whose length is a whole number of periods is periodic for it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SineWave;

impl ExactSolution for SineWave {
    #[inline]
    fn evaluate(&self, x: f64, t: f64) -> f64 {
        (2.0 * PI * Advection1D::characteristic_foot(x, t)).sin()
    }
}

/// Convenience wrapper: sin(2π(x - t)).
#[inline]
pub fn exact_solution(x: f64, t: f64) -> f64 {
    SineWave.evaluate(x, t)
}
