//! # fd-advection
//!
//! Explicit finite-difference schemes for the 1D linear advection equation
//!
//! ```text
//! ∂u/∂t + ∂u/∂x = 0,    x in [0, Lx), periodic
//! ```
//!
//! This crate provides:
//! - A uniform periodic grid with wrap-around neighbor indexing
//! - Lax-Friedrichs, first-order upwind and second-order upwind steppers
//! - A double-buffered time-march driver
//! - The exact traveling-wave solution u(x, t) = sin(2π(x - t))
//! - Grid convergence studies with RMS errors and observed orders
//! - CSV output for plotting
//!
//! # Example
//!
//! ```
//! use fd_advection::{ConvergenceConfig, StandardScheme, FiniteDifferenceScheme, run_single};
//!
//! let config = ConvergenceConfig::reference();
//! let scheme = StandardScheme::SecondOrderUpwind;
//! let run = run_single(&config, &scheme, scheme.recommended_cfl(), 300).unwrap();
//!
//! assert_eq!(run.numeric.len(), 300);
//! assert!(run.metrics().unwrap().l2 < 0.1);
//! ```

pub mod analysis;
pub mod equations;
pub mod error;
pub mod io;
pub mod mesh;
pub mod schemes;
pub mod solver;
pub mod time;

// Re-export main types for convenience
pub use analysis::{
    ConvergenceConfig, ConvergenceStudy, ErrorRecord, SingleRun, run_convergence, run_single,
};
pub use equations::{Advection1D, ExactSolution, SineWave, exact_solution};
pub use error::{AdvectionError, Result};
pub use mesh::PeriodicGrid1D;
pub use schemes::{
    FiniteDifferenceScheme, FirstOrderUpwind, LaxFriedrichs, SecondOrderUpwind, StandardScheme,
    create_scheme,
};
pub use solver::Field1D;
pub use time::{StepRounding, compute_n_steps, march};

#[cfg(feature = "parallel")]
pub use time::march_parallel;
