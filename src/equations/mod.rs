//! Governing equation and its analytic solutions.
//!
//! The solver advances ∂u/∂t + ∂u/∂x = 0 on a periodic domain; the types here
//! describe that equation and provide the exact traveling-wave solution used
//! to seed runs and measure their error.

mod advection;

pub use advection::{Advection1D, ExactSolution, SineWave, exact_solution};
