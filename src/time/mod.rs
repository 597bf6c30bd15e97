//! Time integration.

mod march;

pub use march::{
    STEP_SNAP_TOLERANCE, StepRounding, compute_n_steps, march, march_observed,
};

#[cfg(feature = "parallel")]
pub use march::march_parallel;
