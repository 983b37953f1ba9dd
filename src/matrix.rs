//! Square integer matrix storage and mutable row-range views.

use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{BenchError, Result};
use crate::partition::RowRange;

/// A square, row-major matrix of `i32` cells.
///
/// The buffer is one contiguous heap allocation; cell `(i, j)` lives at
/// index `i * side + j`. The benchmark's structural invariant is that
/// row `i`'s *anti-diagonal* cell sits at column `side - 1 - i`; the
/// fill routines force that cell to 1 so the first product pass over a
/// row is not distorted by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    side: usize,
    data: Vec<i32>,
}

impl SquareMatrix {
    /// Allocate a zeroed `side` x `side` matrix.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            data: vec![0; side * side],
        }
    }

    /// Build a matrix from a row-major buffer.
    pub fn from_vec(side: usize, data: Vec<i32>) -> Result<Self> {
        if data.len() != side * side {
            return Err(BenchError::DimensionMismatch {
                side,
                len: data.len(),
            });
        }
        Ok(Self { side, data })
    }

    /// Side length of the matrix.
    #[inline(always)]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cell at row `i`, column `j`.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.side + j]
    }

    /// Row `i` as a slice.
    #[inline(always)]
    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.side..(i + 1) * self.side]
    }

    /// The whole buffer in row-major order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Fill every cell: 1 on the anti-diagonal, uniform `[1, 10]`
    /// everywhere else, drawn from the thread-local RNG (seeded by the
    /// OS, so separate program runs see different matrices).
    pub fn fill_random(&mut self) {
        self.fill_with(&mut rand::thread_rng());
    }

    /// Deterministic variant of [`fill_random`](Self::fill_random): the
    /// same seed always produces the same matrix.
    pub fn fill_seeded(&mut self, seed: u64) {
        self.fill_with(&mut ChaCha20Rng::seed_from_u64(seed));
    }

    /// Fill from a caller-supplied random source.
    pub fn fill_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.side;
        let cell = Uniform::from(1..=10);
        for i in 0..n {
            for j in 0..n {
                self.data[i * n + j] = if j == n - 1 - i {
                    1
                } else {
                    rng.sample(cell)
                };
            }
        }
    }

    /// Mutable view over the rows in `range`.
    pub fn rows_mut(&mut self, range: RowRange) -> RowsMut<'_> {
        let side = self.side;
        RowsMut {
            first_row: range.start,
            side,
            data: &mut self.data[range.start * side..range.end * side],
        }
    }

    /// Split the buffer into one mutable view per range.
    ///
    /// The ranges must be contiguous (each starting where the previous
    /// one ended); the partitioner's output always is. The returned
    /// views borrow disjoint regions, so handing them to concurrent
    /// workers is race-free by construction.
    ///
    /// Panics if the ranges are not contiguous or run past the last row.
    pub fn split_rows_mut(&mut self, ranges: &[RowRange]) -> Vec<RowsMut<'_>> {
        let side = self.side;
        let first = ranges.first().map_or(0, |r| r.start);
        let mut views = Vec::with_capacity(ranges.len());
        let mut rest = &mut self.data[first * side..];
        let mut next = first;
        for range in ranges {
            assert_eq!(range.start, next, "row ranges must be contiguous");
            let (head, tail) = rest.split_at_mut(range.len() * side);
            views.push(RowsMut {
                first_row: range.start,
                side,
                data: head,
            });
            rest = tail;
            next = range.end;
        }
        views
    }
}

/// Exclusive access to a contiguous run of matrix rows.
///
/// Carries the global index of its first row and the matrix side, which
/// is everything a kernel needs to address each row's anti-diagonal cell.
pub struct RowsMut<'a> {
    first_row: usize,
    side: usize,
    data: &'a mut [i32],
}

impl<'a> RowsMut<'a> {
    /// Side length of the parent matrix.
    #[inline(always)]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Global index of the first row in the view.
    #[inline(always)]
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Number of rows in the view.
    #[inline(always)]
    pub fn row_count(&self) -> usize {
        if self.side == 0 {
            0
        } else {
            self.data.len() / self.side
        }
    }

    /// Iterate over `(global_row_index, row_slice)` pairs.
    pub fn iter_mut<'s>(&'s mut self) -> impl Iterator<Item = (usize, &'s mut [i32])> + 's {
        let first = self.first_row;
        // A zero-side matrix has an empty buffer; chunks_exact_mut still
        // rejects a zero chunk size, so clamp it.
        let chunk = self.side.max(1);
        self.data
            .chunks_exact_mut(chunk)
            .enumerate()
            .map(move |(k, row)| (first + k, row))
    }
}
