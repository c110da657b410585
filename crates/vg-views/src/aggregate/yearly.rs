//! Number of releases per year

use serde::Serialize;

use crate::filter::FilteredView;
use crate::group;

/// Default upper bound on histogram buckets
pub const MAX_YEAR_BUCKETS: usize = 30;

/// Release count of a single year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Release count of an inclusive range of years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearBucket {
    pub start: i32,
    pub end: i32,
    pub count: usize,
}

/// Count records per year, oldest year first
pub fn yearly_distribution(view: &FilteredView<'_>) -> Vec<YearCount> {
    let mut counts: Vec<YearCount> = group::count_by(view.iter(), |r| r.year)
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect();
    counts.sort_by_key(|c| c.year);
    counts
}

/// Histogram of release years with at most `max_buckets` equal-width buckets.
///
/// Buckets are whole years wide and contiguous from the oldest to the newest
/// year, so years without releases show up as zero-count buckets.
pub fn year_histogram(view: &FilteredView<'_>, max_buckets: usize) -> Vec<YearBucket> {
    let counts = yearly_distribution(view);
    let (Some(first), Some(last)) = (counts.first(), counts.last()) else {
        return Vec::new();
    };

    let (min, max) = (i64::from(first.year), i64::from(last.year));
    let span = max - min + 1;
    // At most one bucket per year
    let max_buckets = i64::try_from(max_buckets.max(1))
        .unwrap_or(i64::MAX)
        .min(span);
    let width = (span + max_buckets - 1) / max_buckets;

    let mut buckets = Vec::new();
    let mut start = min;
    while start <= max {
        let end = (start + width - 1).min(max);
        let count = counts
            .iter()
            .filter(|c| (start..=end).contains(&i64::from(c.year)))
            .map(|c| c.count)
            .sum();
        // start and end lie within [min, max], both of which came from i32 values
        buckets.push(YearBucket { start: start as i32, end: end as i32, count });
        start += width;
    }

    tracing::debug!("Year histogram: {} buckets of {} year(s)", buckets.len(), width);
    buckets
}
