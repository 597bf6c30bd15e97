//! Explicit finite-difference schemes.
//!
//! Provides one-step updates for ∂u/∂t + ∂u/∂x = 0 on a periodic grid:
//! - Lax-Friedrichs (centered, dissipative)
//! - First-order upwind
//! - Second-order upwind
//!
//! # Scheme Trait
//!
//! The [`FiniteDifferenceScheme`] trait provides a generic interface: a scheme
//! supplies the point update on a gathered [`StencilValues`], and the trait
//! supplies the periodic sweep over the whole field.
//!
//! ## Built-in Scheme Types
//! - [`LaxFriedrichs`]: stable for CFL <= 1
//! - [`FirstOrderUpwind`]: stable for 0 <= CFL <= 1
//! - [`SecondOrderUpwind`]: stable for 0 <= CFL <= 0.5
//! - [`StandardScheme`]: Enum for dispatch when the scheme is chosen at runtime

mod lax_friedrichs;
pub mod traits;
mod upwind;

pub use lax_friedrichs::LaxFriedrichs;
pub use upwind::{FirstOrderUpwind, SecondOrderUpwind};

pub use traits::{
    BoxedScheme, FiniteDifferenceScheme, ParseSchemeError, StandardScheme, StencilValues,
    create_scheme,
};
