//! Static partitioning of the row space across workers.

/// A half-open span `[start, end)` of row indices assigned to one worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowRange {
    /// First row in the span.
    pub start: usize,
    /// One past the last row in the span.
    pub end: usize,
}

impl RowRange {
    /// Create a new range. `start` must not exceed `end`.
    #[inline(always)]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of rows in the range.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the range holds no rows.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[0, total_rows)` into `workers` contiguous, disjoint ranges
/// whose union covers every row exactly once.
///
/// The first `workers - 1` ranges each hold `total_rows / workers` rows;
/// the last range absorbs the remainder. When `workers > total_rows` the
/// leading ranges come out empty, which is legal: a worker handed an
/// empty range simply does nothing.
pub fn split(total_rows: usize, workers: usize) -> Vec<RowRange> {
    debug_assert!(workers >= 1);
    let chunk = total_rows / workers;
    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 {
                total_rows
            } else {
                start + chunk
            };
            RowRange::new(start, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        let ranges = split(8, 4);
        assert_eq!(
            ranges,
            vec![
                RowRange::new(0, 2),
                RowRange::new(2, 4),
                RowRange::new(4, 6),
                RowRange::new(6, 8),
            ]
        );
    }

    #[test]
    fn last_range_absorbs_remainder() {
        let ranges = split(10, 3);
        assert_eq!(ranges[0], RowRange::new(0, 3));
        assert_eq!(ranges[1], RowRange::new(3, 6));
        assert_eq!(ranges[2], RowRange::new(6, 10));
    }

    #[test]
    fn single_worker_takes_everything() {
        assert_eq!(split(20000, 1), vec![RowRange::new(0, 20000)]);
    }

    #[test]
    fn more_workers_than_rows() {
        let ranges = split(3, 8);
        assert_eq!(ranges.len(), 8);
        for r in &ranges[..7] {
            assert!(r.is_empty());
        }
        assert_eq!(ranges[7], RowRange::new(0, 3));
    }
}
