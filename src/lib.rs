//! # rowprod
//!
//! Measures the wall-clock cost of computing, for every row of a large
//! square matrix, the product of that row's cells, comparing a
//! single-threaded pass against fixed thread-count partitionings of the
//! row space. Each row's product lands in its anti-diagonal cell
//! (column `n - 1 - i` for row `i`), which the fill routine pins to 1
//! so the first pass multiplies only the drawn values.
//!
//! ```rust
//! use rowprod::prelude::*;
//!
//! let mut m = SquareMatrix::new(64);
//! m.fill_seeded(7);
//!
//! let result = harness::run(&mut m, &RowProduct, 4);
//! assert_eq!(result.workers, 4);
//! assert!(result.secs() >= 0.0);
//! ```

pub mod error;
pub mod harness;
pub mod kernel;
pub mod matrix;
pub mod partition;
pub mod prelude;

// --- Public API exports ---

pub use error::{BenchError, Result};
pub use harness::TimingResult;
pub use kernel::{RowKernel, RowProduct, RowSum};
pub use matrix::{RowsMut, SquareMatrix};
pub use partition::RowRange;
