//! Output for external plotting tools.
//!
//! Convergence tables and solution profiles are written as CSV to any
//! [`std::io::Write`] sink, or to a file path.

mod csv;

pub use csv::{
    CONVERGENCE_HEADER, CsvError, PROFILE_HEADER, save_convergence_csv, save_profile_csv,
    write_convergence_csv, write_profile_csv,
};
