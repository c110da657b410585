//! User filter selection across the four dimensions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Dataset, Dimension, Record};

/// Allowed values per dimension.
///
/// An empty set on a dimension lets nothing through, the same way a
/// multi-select with every option cleared matches no rows. Values that do not
/// occur in the dataset are accepted and simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    years: HashSet<i32>,
    genres: HashSet<String>,
    platforms: HashSet<String>,
    publishers: HashSet<String>,
}

impl FilterSelection {
    /// A selection that admits nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Every value observed in the dataset, on every dimension
    pub fn all(dataset: &Dataset) -> Self {
        let options = dataset.filter_options();
        Self {
            years: options.years.into_iter().collect(),
            genres: options.genres.into_iter().collect(),
            platforms: options.platforms.into_iter().collect(),
            publishers: options.publishers.into_iter().collect(),
        }
    }

    /// Replace the allowed years
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    /// Replace the allowed genres
    pub fn with_genres<S: Into<String>>(self, genres: impl IntoIterator<Item = S>) -> Self {
        self.with_text(Dimension::Genre, genres)
    }

    /// Replace the allowed platforms
    pub fn with_platforms<S: Into<String>>(self, platforms: impl IntoIterator<Item = S>) -> Self {
        self.with_text(Dimension::Platform, platforms)
    }

    /// Replace the allowed publishers
    pub fn with_publishers<S: Into<String>>(self, publishers: impl IntoIterator<Item = S>) -> Self {
        self.with_text(Dimension::Publisher, publishers)
    }

    /// Replace the allowed values of a text dimension.
    ///
    /// Passing [`Dimension::Year`] leaves the selection unchanged; use
    /// [`FilterSelection::with_years`] for it.
    pub fn with_text<S: Into<String>>(
        mut self,
        dimension: Dimension,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        let values: HashSet<String> = values.into_iter().map(Into::into).collect();
        match dimension {
            Dimension::Year => {
                tracing::warn!("Ignoring text values for the year dimension");
            }
            Dimension::Genre => self.genres = values,
            Dimension::Platform => self.platforms = values,
            Dimension::Publisher => self.publishers = values,
        }
        self
    }

    /// Allowed values of a text dimension; `None` for [`Dimension::Year`]
    pub fn text_values(&self, dimension: Dimension) -> Option<&HashSet<String>> {
        match dimension {
            Dimension::Year => None,
            Dimension::Genre => Some(&self.genres),
            Dimension::Platform => Some(&self.platforms),
            Dimension::Publisher => Some(&self.publishers),
        }
    }

    /// Whether the dimension's allowed set is empty
    pub fn is_empty_on(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Year => self.years.is_empty(),
            other => self.text_values(other).map_or(true, HashSet::is_empty),
        }
    }

    /// True if any dimension admits nothing, so no record can pass
    pub fn admits_nothing(&self) -> bool {
        Dimension::ALL.iter().any(|d| self.is_empty_on(*d))
    }

    /// True if the record's value on every dimension is allowed
    pub fn admits(&self, record: &Record) -> bool {
        self.years.contains(&record.year)
            && Dimension::TEXT.iter().all(|dimension| {
                match (self.text_values(*dimension), dimension.text_of(record)) {
                    (Some(allowed), Some(value)) => allowed.contains(value),
                    _ => false,
                }
            })
    }
}
