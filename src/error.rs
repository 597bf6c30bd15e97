//! Error types for the finite-difference advection solver.

use thiserror::Error;

use crate::analysis::ErrorRecord;

/// Errors raised while building grids, stepping fields or running sweeps.
///
/// Every check is local: the component that can first detect a bad input
/// returns the error before doing any numerical work.
#[derive(Debug, Error)]
pub enum AdvectionError {
    /// Grid point count below the widest stencil.
    #[error("Invalid grid size: need at least {min} points, got {n}")]
    InvalidGridSize { n: usize, min: usize },

    /// Field too short for the stencil of the named scheme.
    #[error("Invalid field length for {scheme}: need at least {min} values, got {len}")]
    InvalidFieldLength {
        scheme: &'static str,
        len: usize,
        min: usize,
    },

    /// Courant number outside the stability bound of the named scheme.
    #[error("Unstable CFL for {scheme}: {cfl} exceeds the stability limit {max}")]
    UnstableCfl {
        scheme: &'static str,
        cfl: f64,
        max: f64,
    },

    /// The derived step count is zero, or its inputs are not positive.
    #[error("Non-positive time step count from final time {final_time} and CFL {cfl}")]
    NonPositiveTimeStep { final_time: f64, cfl: f64 },

    /// Domain length is not a positive finite number.
    #[error("Invalid domain length: {length}")]
    InvalidDomainLength { length: f64 },

    /// Two buffers that must match in length do not.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The march produced NaN or infinite values.
    #[error("Non-finite solution after step {step}")]
    NonFiniteSolution { step: usize },

    /// A convergence sweep stopped part-way; `completed` keeps the records
    /// of every resolution that finished before `failed_at`.
    #[error(
        "Convergence sweep failed at N = {failed_at} after {} completed resolution(s): {source}",
        .completed.len()
    )]
    PartialSweep {
        completed: Vec<ErrorRecord>,
        failed_at: usize,
        #[source]
        source: Box<AdvectionError>,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AdvectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AdvectionError::InvalidGridSize { n: 2, min: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid grid size: need at least 3 points, got 2"
        );

        let err = AdvectionError::UnstableCfl {
            scheme: "second-order-upwind",
            cfl: 1.5,
            max: 0.5,
        };
        assert!(err.to_string().contains("second-order-upwind"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_partial_sweep_keeps_source() {
        use std::error::Error as _;

        let err = AdvectionError::PartialSweep {
            completed: vec![ErrorRecord {
                n: 100,
                dx: 0.03,
                n_steps: 41,
                l2_error: 0.1,
            }],
            failed_at: 2,
            source: Box::new(AdvectionError::InvalidGridSize { n: 2, min: 3 }),
        };

        let msg = err.to_string();
        assert!(msg.contains("N = 2"));
        assert!(msg.contains("1 completed"));
        assert!(err.source().is_some());
    }
}
