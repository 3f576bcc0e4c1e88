// ============================================================================
// Exact Summation
// Running totals and parallel reduction over certified decimals
// ============================================================================

use crate::numeric::DecimalString;

/// Running exact total of certified decimals
#[derive(Debug, Clone)]
pub struct Accumulator {
    total: DecimalString,
    count: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            total: DecimalString::zero(),
            count: 0,
        }
    }

    /// Add a value to the running total
    pub fn push(&mut self, value: &DecimalString) {
        self.total = &self.total + value;
        self.count += 1;
    }

    /// Current total, normalized
    pub fn total(&self) -> &DecimalString {
        &self.total
    }

    /// Number of values added so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<'a> Extend<&'a DecimalString> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a DecimalString>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Exact sum of `values`; `"0"` when empty.
pub fn sum<'a, I>(values: I) -> DecimalString
where
    I: IntoIterator<Item = &'a DecimalString>,
{
    values.into_iter().sum()
}

/// Exact sum of `values`, split across up to `threads` scoped threads.
///
/// Each thread sums a contiguous chunk; partial sums are then combined in
/// chunk order. Exact addition is associative, so the result is identical to
/// [`sum`]. The thread count is capped at `values.len()`; when the cap is 1
/// (`threads <= 1`, or at most one value) the work runs on the calling thread.
///
/// # Panics
/// Propagates a panic from any worker thread.
pub fn par_sum(values: &[DecimalString], threads: usize) -> DecimalString {
    let threads = threads.max(1).min(values.len().max(1));
    if threads == 1 {
        return sum(values);
    }

    let chunk_size = values.len().div_ceil(threads);
    let partials = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = values
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move |_| sum(chunk)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect::<Vec<_>>()
    })
    .unwrap_or_else(|payload| std::panic::resume_unwind(payload));

    tracing::trace!(threads, chunks = partials.len(), "Combining partial sums");
    partials.iter().sum()
}
