//! Row kernels: the per-row computations the harness times.

use crate::matrix::RowsMut;

/// A computation applied to every row of an assigned row range.
///
/// The kernel only ever sees a mutable view over its own rows, so
/// concurrent workers cannot touch each other's cells. `Sync` because
/// one kernel instance is shared by every worker in a configuration.
pub trait RowKernel: Sync {
    /// Process every row in the view, writing each row's result into
    /// that row's anti-diagonal cell.
    fn compute(&self, rows: &mut RowsMut<'_>);
}

/// Multiplies all current cells of a row and stores the product in the
/// row's anti-diagonal cell (column `n - 1 - i` for row `i`).
///
/// Products use `wrapping_mul`: for any non-trivial side length the
/// product overflows `i32`, and two's-complement wraparound is the
/// accepted, deterministic result, not an error. The product is taken
/// over whatever the cells hold *now*; a second pass over the same
/// matrix folds in the product the first pass stored on the
/// anti-diagonal.
pub struct RowProduct;

impl RowKernel for RowProduct {
    fn compute(&self, rows: &mut RowsMut<'_>) {
        let n = rows.side();
        for (i, row) in rows.iter_mut() {
            let mut product: i32 = 1;
            for &cell in row.iter() {
                product = product.wrapping_mul(cell);
            }
            row[n - 1 - i] = product;
        }
    }
}

/// Sums each row into its anti-diagonal cell.
///
/// Not part of the timed benchmark; it exists because the harness is
/// generic over the kernel, and a second implementation keeps that seam
/// honest.
pub struct RowSum;

impl RowKernel for RowSum {
    fn compute(&self, rows: &mut RowsMut<'_>) {
        let n = rows.side();
        for (i, row) in rows.iter_mut() {
            let mut sum: i32 = 0;
            for &cell in row.iter() {
                sum = sum.wrapping_add(cell);
            }
            row[n - 1 - i] = sum;
        }
    }
}
