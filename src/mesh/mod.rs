//! Grid representation.
//!
//! Provides the uniform periodic 1D grid the finite-difference schemes run on,
//! and the modular index helpers used at every stencil boundary reference.

mod grid1d;
pub mod periodic;

pub use grid1d::PeriodicGrid1D;
pub use periodic::{wrap_left, wrap_right};
