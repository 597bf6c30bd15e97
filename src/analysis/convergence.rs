//! Grid convergence studies.
//!
//! For each requested resolution N the analyzer builds the grid, seeds the
//! exact solution at t = 0, marches to the final time and measures the RMS
//! difference against the exact solution there. The resulting (dx, error)
//! sequence gives the observed order of accuracy.
//!
//! # Example
//!
//! ```
//! use fd_advection::analysis::{ConvergenceConfig, run_convergence};
//! use fd_advection::schemes::{FiniteDifferenceScheme, StandardScheme};
//!
//! let config = ConvergenceConfig::new(3.0, 1.0, vec![60, 120, 240]);
//! let scheme = StandardScheme::FirstOrderUpwind;
//!
//! let study = run_convergence(&config, &scheme, scheme.recommended_cfl()).unwrap();
//! assert_eq!(study.records.len(), 3);
//! assert!(study.records[2].l2_error < study.records[0].l2_error);
//! ```

use tracing::{info, warn};

use crate::equations::{ExactSolution, SineWave};
use crate::error::{AdvectionError, Result};
use crate::mesh::PeriodicGrid1D;
use crate::schemes::FiniteDifferenceScheme;
use crate::solver::Field1D;
use crate::time::{StepRounding, compute_n_steps, march};

use super::metrics::{ErrorMetrics, log_log_slope, observed_orders};

// =============================================================================
// Configuration
// =============================================================================

/// Parameters of a convergence study.
///
/// Passed explicitly to every run; there is no process-wide configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceConfig {
    /// Domain length Lx; the grid covers [0, Lx).
    pub domain_length: f64,
    /// Final time t at which the error is measured.
    pub final_time: f64,
    /// Grid point counts N, in reporting order.
    pub resolutions: Vec<usize>,
    /// How t / dt becomes a step count.
    pub step_rounding: StepRounding,
}

impl ConvergenceConfig {
    /// Create a study over `resolutions` on [0, `domain_length`) up to `final_time`.
    pub fn new(domain_length: f64, final_time: f64, resolutions: Vec<usize>) -> Self {
        Self {
            domain_length,
            final_time,
            resolutions,
            step_rounding: StepRounding::default(),
        }
    }

    /// The reference study: Lx = 3 (three wavelengths), t = 1,
    /// N = 100, 300, 600, 900.
    pub fn reference() -> Self {
        Self::new(3.0, 1.0, vec![100, 300, 600, 900])
    }

    /// Set the grid resolutions.
    pub fn with_resolutions(mut self, resolutions: Vec<usize>) -> Self {
        self.resolutions = resolutions;
        self
    }

    /// Set the domain length.
    pub fn with_domain_length(mut self, domain_length: f64) -> Self {
        self.domain_length = domain_length;
        self
    }

    /// Set the final time.
    pub fn with_final_time(mut self, final_time: f64) -> Self {
        self.final_time = final_time;
        self
    }

    /// Set the step rounding policy.
    pub fn with_step_rounding(mut self, step_rounding: StepRounding) -> Self {
        self.step_rounding = step_rounding;
        self
    }

    /// Check the parameters that do not depend on the resolution or scheme.
    pub fn validate(&self) -> Result<()> {
        if !(self.domain_length.is_finite() && self.domain_length > 0.0) {
            return Err(AdvectionError::InvalidDomainLength {
                length: self.domain_length,
            });
        }
        if !(self.final_time.is_finite() && self.final_time > 0.0) {
            return Err(AdvectionError::NonPositiveTimeStep {
                final_time: self.final_time,
                cfl: f64::NAN,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Results
// =============================================================================

/// Error measured at one resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorRecord {
    /// Grid points N
    pub n: usize,
    /// Grid spacing dx = Lx / N
    pub dx: f64,
    /// Time steps taken
    pub n_steps: usize,
    /// RMS error against the exact solution at the final time
    pub l2_error: f64,
}

/// Error records of one scheme across all resolutions of a study.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceStudy {
    /// Scheme name
    pub scheme: &'static str,
    /// Courant number used at every resolution
    pub cfl: f64,
    /// One record per resolution, in the order requested
    pub records: Vec<ErrorRecord>,
}

impl ConvergenceStudy {
    /// (dx, error) pairs for plotting on log-log axes.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.records.iter().map(|r| (r.dx, r.l2_error)).collect()
    }

    /// Least-squares slope of ln(error) against ln(dx).
    pub fn fitted_order(&self) -> Option<f64> {
        log_log_slope(&self.points())
    }

    /// Order observed between each pair of consecutive resolutions.
    pub fn observed_orders(&self) -> Vec<f64> {
        observed_orders(&self.points())
    }

    /// Reference line error = dx^order at this study's spacings.
    pub fn reference_line(&self, order: i32) -> Vec<(f64, f64)> {
        self.records.iter().map(|r| (r.dx, r.dx.powi(order))).collect()
    }
}

/// Outcome of a single march at one resolution.
#[derive(Clone, Debug)]
pub struct SingleRun {
    /// Scheme name
    pub scheme: &'static str,
    /// Courant number
    pub cfl: f64,
    /// Grid the run was made on
    pub grid: PeriodicGrid1D,
    /// Numerical solution after `n_steps`
    pub numeric: Field1D,
    /// Exact solution at the requested final time
    pub exact: Field1D,
    /// Time steps taken
    pub n_steps: usize,
    /// Requested final time
    pub final_time: f64,
}

impl SingleRun {
    /// Time actually reached: n_steps * CFL * dx.
    pub fn time_reached(&self) -> f64 {
        self.n_steps as f64 * self.cfl * self.grid.dx()
    }

    /// Error metrics of the numerical against the exact field.
    pub fn metrics(&self) -> Result<ErrorMetrics> {
        ErrorMetrics::compute(self.numeric.as_slice(), self.exact.as_slice())
    }

    /// Numerical solution as (x, u) pairs.
    pub fn profile(&self) -> Result<Vec<(f64, f64)>> {
        self.numeric.profile(&self.grid)
    }

    /// Exact solution as (x, u) pairs.
    pub fn exact_profile(&self) -> Result<Vec<(f64, f64)>> {
        self.exact.profile(&self.grid)
    }

    /// Summary record for convergence reporting.
    pub fn record(&self) -> Result<ErrorRecord> {
        Ok(ErrorRecord {
            n: self.grid.n_points(),
            dx: self.grid.dx(),
            n_steps: self.n_steps,
            l2_error: self.metrics()?.l2,
        })
    }
}

// =============================================================================
// Drivers
// =============================================================================

/// Reject inputs that would fail at every resolution, before any stepping.
fn validate_run<S>(config: &ConvergenceConfig, scheme: &S, cfl: f64) -> Result<()>
where
    S: FiniteDifferenceScheme + ?Sized,
{
    config.validate()?;
    scheme.check_cfl(cfl)?;
    if cfl <= 0.0 {
        return Err(AdvectionError::NonPositiveTimeStep {
            final_time: config.final_time,
            cfl,
        });
    }
    Ok(())
}

fn march_resolution<S, E>(
    config: &ConvergenceConfig,
    scheme: &S,
    cfl: f64,
    n: usize,
    solution: &E,
) -> Result<SingleRun>
where
    S: FiniteDifferenceScheme + ?Sized,
    E: ExactSolution + ?Sized,
{
    let grid = PeriodicGrid1D::uniform(config.domain_length, n)?;
    let initial = solution.sample(&grid, 0.0);
    let n_steps = compute_n_steps(config.final_time, grid.dx(), cfl, config.step_rounding)?;

    let numeric = march(initial, scheme, cfl, n_steps)?;
    let exact = solution.sample(&grid, config.final_time);

    Ok(SingleRun {
        scheme: scheme.name(),
        cfl,
        grid,
        numeric,
        exact,
        n_steps,
        final_time: config.final_time,
    })
}

/// March one resolution `n` against the traveling sine wave.
///
/// Uses the domain length, final time and rounding policy of `config`; its
/// resolution list is ignored.
pub fn run_single<S>(config: &ConvergenceConfig, scheme: &S, cfl: f64, n: usize) -> Result<SingleRun>
where
    S: FiniteDifferenceScheme + ?Sized,
{
    validate_run(config, scheme, cfl)?;
    march_resolution(config, scheme, cfl, n, &SineWave)
}

/// Run a convergence study against the traveling sine wave sin(2π(x - t)).
///
/// See [`run_convergence_with`].
pub fn run_convergence<S>(
    config: &ConvergenceConfig,
    scheme: &S,
    cfl: f64,
) -> Result<ConvergenceStudy>
where
    S: FiniteDifferenceScheme + ?Sized,
{
    run_convergence_with(config, scheme, cfl, &SineWave)
}

/// Run a convergence study against an arbitrary exact solution.
///
/// # Errors
///
/// Inputs that are invalid for every resolution (domain length, final time,
/// CFL) fail before any stepping. A failure at one resolution returns
/// [`AdvectionError::PartialSweep`] holding the records of the resolutions
/// that completed before it.
pub fn run_convergence_with<S, E>(
    config: &ConvergenceConfig,
    scheme: &S,
    cfl: f64,
    solution: &E,
) -> Result<ConvergenceStudy>
where
    S: FiniteDifferenceScheme + ?Sized,
    E: ExactSolution + ?Sized,
{
    validate_run(config, scheme, cfl)?;

    let mut records = Vec::with_capacity(config.resolutions.len());

    for &n in &config.resolutions {
        let record = march_resolution(config, scheme, cfl, n, solution).and_then(|run| run.record());

        match record {
            Ok(record) => {
                info!(
                    scheme = scheme.name(),
                    n = record.n,
                    dx = record.dx,
                    n_steps = record.n_steps,
                    l2_error = record.l2_error,
                    "resolution complete"
                );
                records.push(record);
            }
            Err(source) => {
                warn!(
                    scheme = scheme.name(),
                    n,
                    completed = records.len(),
                    error = %source,
                    "convergence sweep aborted"
                );
                return Err(AdvectionError::PartialSweep {
                    completed: records,
                    failed_at: n,
                    source: Box::new(source),
                });
            }
        }
    }

    Ok(ConvergenceStudy {
        scheme: scheme.name(),
        cfl,
        records,
    })
}
