use rowprod::partition::{split, RowRange};

#[test]
fn every_row_is_covered_exactly_once() {
    for total_rows in [0usize, 1, 7, 100, 1024, 20000] {
        for workers in [1usize, 2, 3, 4, 8, 16, 256] {
            let ranges = split(total_rows, workers);
            assert_eq!(ranges.len(), workers);

            let mut seen = vec![0u32; total_rows];
            for r in &ranges {
                assert!(r.start <= r.end);
                assert!(r.end <= total_rows);
                for row in r.start..r.end {
                    seen[row] += 1;
                }
            }
            for (row, count) in seen.iter().enumerate() {
                assert_eq!(
                    *count, 1,
                    "row {} covered {} times ({} rows, {} workers)",
                    row, count, total_rows, workers
                );
            }
        }
    }
}

#[test]
fn ranges_are_contiguous_and_ordered() {
    let ranges = split(20000, 7);
    let mut next = 0;
    for r in &ranges {
        assert_eq!(r.start, next);
        next = r.end;
    }
    assert_eq!(next, 20000);
}

#[test]
fn leading_ranges_are_floor_sized() {
    let total_rows = 20000;
    for workers in [4usize, 8, 16, 32, 64, 128, 256] {
        let ranges = split(total_rows, workers);
        let chunk = total_rows / workers;
        for r in &ranges[..workers - 1] {
            assert_eq!(r.len(), chunk);
        }
        assert_eq!(
            ranges[workers - 1].len(),
            total_rows - (workers - 1) * chunk
        );
    }
}

#[test]
fn excess_workers_get_empty_ranges() {
    let ranges = split(5, 12);
    assert!(ranges[..11].iter().all(RowRange::is_empty));
    assert_eq!(ranges[11], RowRange::new(0, 5));
}
