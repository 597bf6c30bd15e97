//! Periodic index arithmetic.
//!
//! Stencils address neighbors with explicit modular arithmetic so that index
//! -1 resolves to N-1 and index N resolves to 0.

/// Index `offset` points to the left of `j` on a periodic grid of `n` points.
///
/// Computes `(j + n - offset mod n) % n`, so any offset is valid, including
/// offsets wider than the grid.
///
/// # Panics
///
/// Panics if `n == 0`.
#[inline]
pub fn wrap_left(j: usize, offset: usize, n: usize) -> usize {
    debug_assert!(j < n);
    (j + n - offset % n) % n
}

/// Index `offset` points to the right of `j` on a periodic grid of `n` points.
#[inline]
pub fn wrap_right(j: usize, offset: usize, n: usize) -> usize {
    debug_assert!(j < n);
    (j + offset) % n
}
