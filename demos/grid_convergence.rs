//! Grid convergence study for the three finite-difference schemes.
//!
//! Runs the reference sweep (Lx = 3, t = 1, N = 100, 300, 600, 900) for each
//! scheme and prints the RMS error per resolution with the observed orders.
//!
//! Usage:
//!
//! ```text
//! cargo run --example grid_convergence [convergence.csv]
//! ```
//!
//! When a path is given, the table is also written there as CSV.

use fd_advection::io::save_convergence_csv;
use fd_advection::{ConvergenceConfig, FiniteDifferenceScheme, StandardScheme, run_convergence};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let output = std::env::args().nth(1);
    let config = ConvergenceConfig::reference();

    println!("Grid Convergence Study");
    println!("======================");
    println!("Domain: [0, {})", config.domain_length);
    println!("Final time: {}", config.final_time);
    println!("Resolutions: {:?}", config.resolutions);
    println!();

    let mut studies = Vec::with_capacity(StandardScheme::ALL.len());

    for scheme in StandardScheme::ALL {
        let study = run_convergence(&config, &scheme, scheme.recommended_cfl())?;

        println!(
            "{} ({}), CFL = {}, stencil order {}",
            scheme,
            scheme.short_name(),
            study.cfl,
            scheme.spatial_order()
        );
        println!("  {:>5} {:>12} {:>7} {:>12}", "N", "dx", "steps", "L2 error");
        for r in &study.records {
            println!(
                "  {:>5} {:>12.4e} {:>7} {:>12.4e}",
                r.n, r.dx, r.n_steps, r.l2_error
            );
        }

        let orders: Vec<String> = study
            .observed_orders()
            .iter()
            .map(|p| format!("{:.2}", p))
            .collect();
        println!("  Observed orders: [{}]", orders.join(", "));
        match study.fitted_order() {
            Some(p) => println!("  Fitted order:    {:.3}", p),
            None => println!("  Fitted order:    n/a"),
        }
        println!();

        studies.push(study);
    }

    if let Some(path) = output {
        save_convergence_csv(&path, &studies)?;
        info!(path = %path, "convergence table written");
    }

    Ok(())
}
