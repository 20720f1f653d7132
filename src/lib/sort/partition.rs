//! Serial building blocks of the quicksort: insertion sort for small ranges
//! and median-of-three partitioning for everything else.
//!
//! Comparisons use the standard `f64` ordering. NaN is rejected at the I/O
//! boundary (see [`crate::data_io`]); these routines assume NaN-free input.

/// In-place insertion sort.
///
/// Used below the splitting cutoff, where the overhead of partitioning and
/// re-enqueueing outweighs the O(n²) worst case.
pub fn insertion_sort(values: &mut [f64]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Partitions `values` around a median-of-three pivot and returns the split
/// index `m` with `1 <= m <= n - 1`.
///
/// The first, middle, and last elements are reordered so the median lands in
/// the middle, which also leaves sentinels at both ends
/// (`values[0] <= pivot <= values[n - 1]`). A two-pointer scan then swaps
/// strictly-misplaced elements from both ends until the pointers cross.
///
/// Postcondition: every element of `[0, m)` is `<= pivot` and every element
/// of `[m, n)` is `>= pivot`, with both halves non-empty, so repeated
/// splitting always makes forward progress, including on all-equal,
/// already-sorted, and reverse-sorted input.
///
/// Callers only invoke this above the cutoff, so `n >= 2` always holds (for
/// `n == 2` the middle and last samples coincide and the scan degenerates to
/// a single compare-swap).
pub fn partition(values: &mut [f64]) -> usize {
    let n = values.len();
    debug_assert!(n >= 2, "partition requires at least two elements");

    let (first, middle, last) = (0, n / 2, n - 1);
    if values[middle] < values[first] {
        values.swap(first, middle);
    }
    if values[last] < values[middle] {
        values.swap(middle, last);
    }
    if values[middle] < values[first] {
        values.swap(first, middle);
    }

    let pivot = values[middle];
    let mut i = 1;
    let mut j = n - 2;
    loop {
        // The end sentinels bound both scans, so neither index can run off.
        while values[i] < pivot {
            i += 1;
        }
        while values[j] > pivot {
            j -= 1;
        }
        if i >= j {
            break;
        }
        values.swap(i, j);
        i += 1;
        j -= 1;
    }
    i
}
