//! CSV output for plotting.
//!
//! Two tables are written:
//! - convergence: `scheme,n,dx,n_steps,l2_error`, one row per resolution
//! - profile: `x,u_numeric,u_exact`, one row per grid point
//!
//! Values are written with full `f64` precision so a plot can be reproduced
//! from the file alone.
//!
//! # Example
//!
//! ```ignore
//! use fd_advection::io::save_convergence_csv;
//!
//! save_convergence_csv("convergence.csv", &studies)?;
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::analysis::{ConvergenceStudy, SingleRun};

/// Error type for CSV output.
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O error during file operations.
    #[error("CSV I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Columns of a table differ in length.
    #[error("Column length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Header of the convergence table.
pub const CONVERGENCE_HEADER: &str = "scheme,n,dx,n_steps,l2_error";

/// Header of the profile table.
pub const PROFILE_HEADER: &str = "x,u_numeric,u_exact";

/// Write the records of every study, scheme by scheme.
pub fn write_convergence_csv<W: Write>(
    writer: W,
    studies: &[ConvergenceStudy],
) -> Result<(), CsvError> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{CONVERGENCE_HEADER}")?;

    for study in studies {
        for r in &study.records {
            writeln!(
                writer,
                "{},{},{:e},{},{:e}",
                study.scheme, r.n, r.dx, r.n_steps, r.l2_error
            )?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write the numerical and exact solutions of a run against x.
pub fn write_profile_csv<W: Write>(writer: W, run: &SingleRun) -> Result<(), CsvError> {
    let x = run.grid.coordinates();
    let numeric = run.numeric.as_slice();
    let exact = run.exact.as_slice();

    for column in [numeric, exact] {
        if column.len() != x.len() {
            return Err(CsvError::LengthMismatch {
                expected: x.len(),
                actual: column.len(),
            });
        }
    }

    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{PROFILE_HEADER}")?;

    for ((x, u), e) in x.iter().zip(numeric).zip(exact) {
        writeln!(writer, "{x:e},{u:e},{e:e}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Create `path` and write the convergence table to it.
pub fn save_convergence_csv(
    path: impl AsRef<Path>,
    studies: &[ConvergenceStudy],
) -> Result<(), CsvError> {
    write_convergence_csv(File::create(path)?, studies)
}

/// Create `path` and write the profile table of `run` to it.
pub fn save_profile_csv(path: impl AsRef<Path>, run: &SingleRun) -> Result<(), CsvError> {
    write_profile_csv(File::create(path)?, run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ConvergenceConfig, ErrorRecord, run_single};
    use crate::schemes::StandardScheme;
    use crate::solver::Field1D;

    fn study() -> ConvergenceStudy {
        ConvergenceStudy {
            scheme: "first-order-upwind",
            cfl: 0.8,
            records: vec![
                ErrorRecord {
                    n: 100,
                    dx: 0.03,
                    n_steps: 41,
                    l2_error: 0.25,
                },
                ErrorRecord {
                    n: 300,
                    dx: 0.01,
                    n_steps: 125,
                    l2_error: 0.0625,
                },
            ],
        }
    }

    #[test]
    fn test_convergence_rows() {
        let mut buf = Vec::new();
        write_convergence_csv(&mut buf, &[study()]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CONVERGENCE_HEADER);
        assert_eq!(lines[1], "first-order-upwind,100,3e-2,41,2.5e-1");

        let fields: Vec<&str> = lines[2].split(',').collect();
        assert_eq!(fields[1], "300");
        assert_eq!(fields[2].parse::<f64>().unwrap(), 0.01);
        assert_eq!(fields[4].parse::<f64>().unwrap(), 0.0625);
    }

    #[test]
    fn test_profile_file() {
        use std::fs;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.csv");

        let config = ConvergenceConfig::new(1.0, 0.25, vec![20]);
        let run = run_single(&config, &StandardScheme::LaxFriedrichs, 0.8, 20).unwrap();
        save_profile_csv(&path, &run).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], PROFILE_HEADER);
        assert_eq!(lines.len(), 21);

        let row: Vec<f64> = lines[6]
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(row[0], run.grid.x(5));
        assert_eq!(row[1], run.numeric.as_slice()[5]);
        assert_eq!(row[2], run.exact.as_slice()[5]);
    }

    #[test]
    fn test_profile_length_mismatch() {
        let config = ConvergenceConfig::new(1.0, 0.25, vec![20]);
        let mut run = run_single(&config, &StandardScheme::FirstOrderUpwind, 0.5, 10).unwrap();
        run.exact = Field1D::zeros(9);

        let err = write_profile_csv(Vec::new(), &run).unwrap_err();
        assert!(matches!(
            err,
            CsvError::LengthMismatch {
                expected: 10,
                actual: 9
            }
        ));
    }

    #[test]
    fn test_save_convergence_creates_file() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("convergence.csv");
        save_convergence_csv(&path, &[study(), study()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 5);
    }
}
