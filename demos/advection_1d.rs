//! 1D advection example with the three finite-difference schemes.
//!
//! Solves du/dt + du/dx = 0 on [0, 3) with:
//! - Initial condition: u(x, 0) = sin(2π x)
//! - Advection velocity: a = 1
//! - Periodic boundaries
//!
//! After time t, exact solution is u(x, t) = sin(2π (x - t))
//!
//! Run with `RUST_LOG=debug` to see the driver's log events.

use fd_advection::time::march_observed;
use fd_advection::{
    ExactSolution, FiniteDifferenceScheme, PeriodicGrid1D, SineWave, StandardScheme,
    StepRounding, analysis::ErrorMetrics, compute_n_steps,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parameters
    let length = 3.0;
    let n_points = 300;
    let t_final = 1.0;

    println!("1D Finite-Difference Advection Solver");
    println!("=====================================");
    println!("Domain: [0, {})", length);
    println!("Grid points: {}", n_points);
    println!("Final time: {}", t_final);
    println!();

    let grid = PeriodicGrid1D::uniform(length, n_points)?;
    let exact = SineWave.sample(&grid, t_final);

    info!(dx = grid.dx(), "grid ready");

    for scheme in StandardScheme::ALL {
        let cfl = scheme.recommended_cfl();
        let n_steps = compute_n_steps(t_final, grid.dx(), cfl, StepRounding::SnappedFloor)?;

        println!("{} (CFL = {}, {} steps)", scheme, cfl, n_steps);

        let report_every = (n_steps / 5).max(1);
        let u = march_observed(
            SineWave.sample(&grid, 0.0),
            &scheme,
            cfl,
            n_steps,
            |step, u| {
                if step % report_every == 0 || step == n_steps {
                    let t = step as f64 * cfl * grid.dx();
                    let reference = SineWave.sample(&grid, t);
                    if let Ok(m) = ErrorMetrics::compute(u.as_slice(), reference.as_slice()) {
                        println!(
                            "  Step {:5} / {:5}: t = {:.4}, L2 error = {:.4e}",
                            step, n_steps, t, m.l2
                        );
                    }
                }
            },
        )?;

        let metrics = ErrorMetrics::compute(u.as_slice(), exact.as_slice())?;
        println!("  Final L2 error:   {:.4e}", metrics.l2);
        println!("  Final Linf error: {:.4e}", metrics.linf);

        println!("  {:>8} {:>12} {:>12}", "x", "numeric", "exact");
        for j in (0..n_points).step_by(n_points / 10) {
            println!(
                "  {:>8.3} {:>12.6} {:>12.6}",
                grid.x(j),
                u.as_slice()[j],
                exact.as_slice()[j]
            );
        }
        println!();
    }

    Ok(())
}
