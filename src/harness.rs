//! Wall-clock timing of one benchmark configuration.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use crate::kernel::RowKernel;
use crate::matrix::SquareMatrix;
use crate::partition::{self, RowRange};

/// Elapsed wall-clock time for one worker-count configuration.
#[derive(Copy, Clone, Debug)]
pub struct TimingResult {
    /// Number of workers that executed the kernel.
    pub workers: usize,
    /// Wall-clock time from first partition to last join.
    pub elapsed: Duration,
}

impl TimingResult {
    /// Elapsed time in seconds.
    #[inline(always)]
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for TimingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Execution time with {} thread(s): {} seconds",
            self.workers,
            self.secs()
        )
    }
}

/// Run `kernel` over every row of `matrix`, split across `workers`
/// threads, and report the elapsed wall-clock time.
///
/// With one worker the kernel runs inline on the calling thread. With
/// more, the row space is partitioned and one scoped thread is spawned
/// per range; the clock stops only after every worker has been joined,
/// so the caller always observes a fully settled matrix. A worker panic
/// propagates out of the scope and aborts the run; there are no
/// partial results and no retries.
pub fn run<K: RowKernel>(matrix: &mut SquareMatrix, kernel: &K, workers: usize) -> TimingResult {
    assert!(workers >= 1, "at least one worker is required");
    let total_rows = matrix.side();
    let started = Instant::now();

    if workers == 1 {
        let mut all = matrix.rows_mut(RowRange::new(0, total_rows));
        kernel.compute(&mut all);
    } else {
        let ranges = partition::split(total_rows, workers);
        let views = matrix.split_rows_mut(&ranges);
        thread::scope(|scope| {
            for mut view in views {
                scope.spawn(move || kernel.compute(&mut view));
            }
        });
    }

    TimingResult {
        workers,
        elapsed: started.elapsed(),
    }
}
