//! Filtering, KPIs and aggregation views over a sales dataset
//!
//! Every entry point is a pure function of a borrowed [`vg_core::Dataset`]
//! and a [`vg_core::FilterSelection`], so one dataset can serve any number of
//! concurrent selections.

pub mod aggregate;
pub mod filter;
pub mod format;
pub mod group;
pub mod metrics;
mod report;

#[cfg(test)]
mod fixtures;

pub use aggregate::{
    company_series, company_series_with, genre_ranking, genre_ranking_with, regional_split,
    top_publishers, year_histogram, yearly_distribution, CompanyYearSales, GenreSales, Region,
    RegionSales, YearBucket, YearCount,
};
pub use filter::FilteredView;
pub use format::{format_magnitude, MagnitudeUnit};
pub use metrics::KpiBundle;
pub use report::{DashboardReport, ViewConfig};

/// Message shown in place of charts when a selection matches nothing
pub const NO_DATA_MESSAGE: &str = "No data found for the selected filters";
