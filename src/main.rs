//! Row-product thread-scaling benchmark driver.
//!
//! Fills one large matrix, times a single-threaded pass, then times the
//! same pass split across each configured thread count. The matrix is
//! deliberately not refilled between configurations: later passes
//! consume the products earlier passes stored on the anti-diagonal,
//! which changes the stored values but not the amount of work timed.

use rowprod::harness;
use rowprod::{RowProduct, SquareMatrix};

const MATRIX_SIZE: usize = 20000;
const THREAD_COUNTS: [usize; 7] = [4, 8, 16, 32, 64, 128, 256];

fn main() {
    let mut matrix = SquareMatrix::new(MATRIX_SIZE);
    matrix.fill_random();

    println!("Without parallelization:");
    println!("{}", harness::run(&mut matrix, &RowProduct, 1));

    for &threads in THREAD_COUNTS.iter() {
        println!("With {} threads:", threads);
        println!("{}", harness::run(&mut matrix, &RowProduct, threads));
    }
}
