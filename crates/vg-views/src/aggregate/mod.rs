//! Derived tables that drive the dashboard charts.
//!
//! Every view returns an empty table for an empty filtered view; callers
//! treat that as "nothing to display".

pub mod company;
pub mod genre_ranking;
pub mod regional;
pub mod yearly;

pub use company::{
    company_series, company_series_with, top_publishers, CompanyYearSales, TOP_PUBLISHERS,
};
pub use genre_ranking::{genre_ranking, genre_ranking_with, GenreSales, TOP_GENRES};
pub use regional::{regional_split, Region, RegionSales};
pub use yearly::{year_histogram, yearly_distribution, YearBucket, YearCount, MAX_YEAR_BUCKETS};
