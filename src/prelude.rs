// src/prelude.rs
//! One-glob import for the benchmark's moving parts.
//!
//! ```rust
//! use rowprod::prelude::*;
//! ```

pub use crate::error::{BenchError, Result};
pub use crate::harness::{self, TimingResult};
pub use crate::kernel::{RowKernel, RowProduct, RowSum};
pub use crate::matrix::{RowsMut, SquareMatrix};
pub use crate::partition::{split, RowRange};
