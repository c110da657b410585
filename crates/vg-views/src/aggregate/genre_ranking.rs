//! Top genres by global sales

use serde::Serialize;

use crate::filter::FilteredView;
use crate::group;

/// Default number of genres kept
pub const TOP_GENRES: usize = 10;

/// One bar of the genre ranking chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreSales {
    pub genre: String,
    pub global_sales: f64,
}

/// The top ten genres, ordered smallest to largest
pub fn genre_ranking(view: &FilteredView<'_>) -> Vec<GenreSales> {
    genre_ranking_with(view, TOP_GENRES)
}

/// The `top` genres by summed global sales, ordered ascending by sum so a
/// horizontal bar chart ends with the largest bar. Equal sums are ordered by
/// genre name, both when cutting and when ordering.
pub fn genre_ranking_with(view: &FilteredView<'_>, top: usize) -> Vec<GenreSales> {
    let sums = group::sum_by(view.iter(), |r| r.genre.as_str(), |r| r.sales_global);

    let mut ranked = group::top_n(&sums, top);
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    tracing::debug!("Genre ranking has {} of {} genres", ranked.len(), sums.len());

    ranked
        .into_iter()
        .map(|(genre, global_sales)| GenreSales {
            genre: genre.to_string(),
            global_sales,
        })
        .collect()
}
