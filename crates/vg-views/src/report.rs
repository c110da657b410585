//! One filter-and-aggregate cycle over a dataset

use serde::{Deserialize, Serialize};
use vg_core::{Dataset, FilterSelection};

use crate::aggregate::{
    company_series_with, genre_ranking_with, regional_split, year_histogram, yearly_distribution,
    CompanyYearSales, GenreSales, RegionSales, YearBucket, YearCount, MAX_YEAR_BUCKETS,
    TOP_GENRES, TOP_PUBLISHERS,
};
use crate::filter::{self, FilteredView};
use crate::format::format_magnitude;
use crate::metrics::{self, KpiBundle};
use crate::NO_DATA_MESSAGE;

/// Sizes of the aggregation views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Genres kept in the ranking
    pub top_genres: usize,
    /// Publishers followed in the time series
    pub top_publishers: usize,
    /// Upper bound on year histogram buckets
    pub max_year_buckets: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            top_genres: TOP_GENRES,
            top_publishers: TOP_PUBLISHERS,
            max_year_buckets: MAX_YEAR_BUCKETS,
        }
    }
}

/// Filtered view, KPIs and every aggregation table for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport<'a> {
    pub view: FilteredView<'a>,
    pub kpis: KpiBundle,
    pub genre_ranking: Vec<GenreSales>,
    pub yearly_distribution: Vec<YearCount>,
    pub year_histogram: Vec<YearBucket>,
    pub regional_split: Vec<RegionSales>,
    pub company_series: Vec<CompanyYearSales>,
}

impl<'a> DashboardReport<'a> {
    /// Filter the dataset and compute everything derived from the result.
    ///
    /// Pure: the dataset is only read, so concurrent callers sharing one
    /// dataset get independent reports.
    pub fn build(dataset: &'a Dataset, selection: &FilterSelection, config: &ViewConfig) -> Self {
        let view = filter::apply(dataset, selection);
        Self::from_view(view, config)
    }

    /// Compute KPIs and tables for an already filtered view
    pub fn from_view(view: FilteredView<'a>, config: &ViewConfig) -> Self {
        if view.is_empty() {
            tracing::warn!("{}", NO_DATA_MESSAGE);
        }

        let report = Self {
            kpis: metrics::compute(&view),
            genre_ranking: genre_ranking_with(&view, config.top_genres),
            yearly_distribution: yearly_distribution(&view),
            year_histogram: year_histogram(&view, config.max_year_buckets),
            regional_split: regional_split(&view),
            company_series: company_series_with(&view, config.top_publishers),
            view,
        };

        tracing::info!(
            "Report built: {} records, {} genres ranked, {} series rows",
            report.kpis.record_count,
            report.genre_ranking.len(),
            report.company_series.len()
        );
        report
    }

    /// True when the selection matched no records
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Total global sales rendered for display
    pub fn formatted_total(&self) -> String {
        format_magnitude(self.kpis.total_global_sales)
    }
}
