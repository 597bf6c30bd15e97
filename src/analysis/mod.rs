//! Accuracy analysis.
//!
//! - **Metrics**: RMS and max-norm errors, log-log slopes
//! - **Convergence**: grid refinement studies against an exact solution

mod convergence;
mod metrics;

pub use convergence::{
    ConvergenceConfig, ConvergenceStudy, ErrorRecord, SingleRun, run_convergence,
    run_convergence_with, run_single,
};
pub use metrics::{ErrorMetrics, l2_error, linf_error, log_log_slope, observed_orders};
