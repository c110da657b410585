//! Yearly global sales of the leading publishers

use serde::Serialize;

use crate::filter::FilteredView;
use crate::group;

/// Default number of publishers followed
pub const TOP_PUBLISHERS: usize = 3;

/// One point of a publisher's sales line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyYearSales {
    pub year: i32,
    pub publisher: String,
    pub global_sales: f64,
}

/// Publishers with the largest summed global sales, largest first.
/// Equal sums are ordered by publisher name.
pub fn top_publishers(view: &FilteredView<'_>, top: usize) -> Vec<(String, f64)> {
    let sums = group::sum_by(view.iter(), |r| r.publisher.as_str(), |r| r.sales_global);
    group::top_n(&sums, top)
        .into_iter()
        .map(|(publisher, sales)| (publisher.to_string(), sales))
        .collect()
}

/// Time series of the top three publishers
pub fn company_series(view: &FilteredView<'_>) -> Vec<CompanyYearSales> {
    company_series_with(view, TOP_PUBLISHERS)
}

/// Sum global sales per `(year, publisher)` for the `top` publishers only.
///
/// Rows are ordered by year, then publisher name. Only non-empty groups are
/// emitted.
pub fn company_series_with(view: &FilteredView<'_>, top: usize) -> Vec<CompanyYearSales> {
    let leaders = top_publishers(view, top);
    let is_leader = |publisher: &str| leaders.iter().any(|(p, _)| p == publisher);

    let restricted = view.iter().filter(|r| is_leader(r.publisher.as_str()));
    let sums = group::sum_by(restricted, |r| (r.year, r.publisher.as_str()), |r| r.sales_global);

    let mut rows: Vec<CompanyYearSales> = sums
        .into_iter()
        .map(|((year, publisher), global_sales)| CompanyYearSales {
            year,
            publisher: publisher.to_string(),
            global_sales,
        })
        .collect();
    rows.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.publisher.cmp(&b.publisher)));

    tracing::debug!("Company series: {} rows for {} publishers", rows.len(), leaders.len());
    rows
}
