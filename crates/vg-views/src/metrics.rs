//! Headline KPIs of a filtered view

use serde::Serialize;

use crate::filter::FilteredView;
use crate::group;

/// The four summary scalars shown above the charts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KpiBundle {
    /// Sum of global sales, in millions
    pub total_global_sales: f64,
    /// Name of the best-selling record; the first one wins a tie
    pub top_selling_game_name: String,
    /// Most common genre; among equally common genres the one seen first wins
    pub most_frequent_genre: String,
    pub record_count: usize,
}

/// Compute the KPI bundle. An empty view gives `{0, "", "", 0}`.
pub fn compute(view: &FilteredView<'_>) -> KpiBundle {
    if view.is_empty() {
        return KpiBundle::default();
    }

    let total_global_sales = view.iter().map(|r| r.sales_global).sum();

    KpiBundle {
        total_global_sales,
        top_selling_game_name: top_selling(view).unwrap_or_default(),
        most_frequent_genre: most_frequent_genre(view).unwrap_or_default(),
        record_count: view.len(),
    }
}

/// First record with the maximum global sales
fn top_selling(view: &FilteredView<'_>) -> Option<String> {
    let mut best: Option<&vg_core::Record> = None;
    for record in view.iter() {
        if best.map_or(true, |b| record.sales_global > b.sales_global) {
            best = Some(record);
        }
    }
    best.map(|r| r.name.clone())
}

/// Genre with the highest count, ties going to the earliest first occurrence
fn most_frequent_genre(view: &FilteredView<'_>) -> Option<String> {
    let counts = group::count_by(view.iter(), |r| r.genre.as_str());

    let mut best: Option<(&str, usize)> = None;
    for (genre, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((genre, count));
        }
    }
    best.map(|(genre, _)| genre.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use crate::fixtures::{five_record_dataset, record, sample_dataset};
    use vg_core::{Dataset, FilterSelection};

    #[test]
    fn test_five_record_example() {
        let dataset = five_record_dataset();
        let view = filter::apply(&dataset, &FilterSelection::all(&dataset));

        let kpis = compute(&view);
        assert_eq!(kpis.total_global_sales, 42.0);
        assert_eq!(kpis.top_selling_game_name, "Action B");
        assert_eq!(kpis.most_frequent_genre, "Action");
        assert_eq!(kpis.record_count, 5);
    }

    #[test]
    fn test_empty_view_defaults() {
        let kpis = compute(&FilteredView::default());
        assert_eq!(
            kpis,
            KpiBundle {
                total_global_sales: 0.0,
                top_selling_game_name: String::new(),
                most_frequent_genre: String::new(),
                record_count: 0,
            }
        );
    }

    #[test]
    fn test_top_selling_tie_goes_to_first_record() {
        let dataset = Dataset::new(vec![
            record("Small", 2000, "Action", "PS2", "Sony", 1.0),
            record("First Big", 2001, "Action", "PS2", "Sony", 9.0),
            record("Second Big", 2002, "Action", "PS2", "Sony", 9.0),
        ])
        .unwrap();
        let view = filter::apply(&dataset, &FilterSelection::all(&dataset));

        assert_eq!(compute(&view).top_selling_game_name, "First Big");
    }

    #[test]
    fn test_genre_mode_tie_goes_to_first_seen() {
        // Racing and Puzzle both appear twice; Racing is seen first
        let dataset = Dataset::new(vec![
            record("R1", 2000, "Racing", "PS2", "Sony", 1.0),
            record("P1", 2000, "Puzzle", "PS2", "Sony", 1.0),
            record("P2", 2001, "Puzzle", "PS2", "Sony", 1.0),
            record("R2", 2001, "Racing", "PS2", "Sony", 1.0),
            record("S1", 2002, "Sports", "PS2", "Sony", 1.0),
        ])
        .unwrap();
        let view = filter::apply(&dataset, &FilterSelection::all(&dataset));

        assert_eq!(compute(&view).most_frequent_genre, "Racing");
    }

    #[test]
    fn test_record_count_matches_view() {
        let dataset = sample_dataset();
        let selection = FilterSelection::all(&dataset).with_publishers(["Nintendo"]);
        let view = filter::apply(&dataset, &selection);

        let kpis = compute(&view);
        assert_eq!(kpis.record_count, view.len());
        assert_eq!(kpis.top_selling_game_name, "Wii Sports");
    }

    #[test]
    fn test_total_is_additive_over_disjoint_partition() {
        let dataset = sample_dataset();
        let all = FilterSelection::all(&dataset);
        let publishers = dataset.filter_options().publishers;
        let (left, right) = publishers.split_at(publishers.len() / 2);

        let total = compute(&filter::apply(&dataset, &all)).total_global_sales;
        let total_for = |names: &[String]| {
            let selection = all.clone().with_publishers(names.to_vec());
            compute(&filter::apply(&dataset, &selection)).total_global_sales
        };
        let left_total = total_for(left);
        let right_total = total_for(right);

        assert!((total - (left_total + right_total)).abs() < 1e-9);
    }
}
