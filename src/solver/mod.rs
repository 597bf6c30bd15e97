//! Solution storage.

mod field;

pub use field::Field1D;
