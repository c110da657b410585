//! The sales dashboard layout: four KPI tiles, four charts and the raw table

use serde_json::{json, Value};
use vg_core::SalesField;
use vg_views::DashboardReport;

use crate::{Palette, ViewSpec};

const SALES_AXIS: &str = "Global sales (millions)";
const YEAR_AXIS: &str = "Years";

/// Turns a [`DashboardReport`] into view specs for a renderer
#[derive(Debug, Clone, Default)]
pub struct DashboardTemplate {
    palette: Palette,
}

impl DashboardTemplate {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Specs in display order: KPI metrics, genre bar chart, year histogram,
    /// regional pie, publisher lines, then the detail table.
    pub fn build(&self, report: &DashboardReport<'_>) -> Vec<ViewSpec> {
        let mut specs = self.metric_specs(report);
        specs.push(self.genre_bar(report));
        specs.push(self.year_histogram(report));
        specs.push(self.regional_pie(report));
        specs.push(self.company_lines(report));
        specs.push(detail_table(report));

        tracing::debug!("Dashboard template produced {} view specs", specs.len());
        specs
    }

    fn metric_specs(&self, report: &DashboardReport<'_>) -> Vec<ViewSpec> {
        let kpis = &report.kpis;
        vec![
            metric("Total global sales", format!("${}", report.formatted_total())),
            metric("Best-selling game", kpis.top_selling_game_name.clone()),
            metric("Most popular genre", kpis.most_frequent_genre.clone()),
            metric("Total records", kpis.record_count.to_string()),
        ]
    }

    fn genre_bar(&self, report: &DashboardReport<'_>) -> ViewSpec {
        let title = "Top 10 best-selling genres worldwide";
        if report.genre_ranking.is_empty() {
            return ViewSpec::empty("bar", title, "No data to display in the genre chart.");
        }

        ViewSpec::new(
            "bar",
            title,
            json!({
                "orientation": "horizontal",
                "x": "global_sales",
                "y": "genre",
                "x_label": SALES_AXIS,
                "color": self.palette.color(0),
                "data": report.genre_ranking,
            }),
        )
    }

    fn year_histogram(&self, report: &DashboardReport<'_>) -> ViewSpec {
        let title = "Number of games released per year";
        if report.year_histogram.is_empty() {
            let message = "No data to display in the distribution chart.";
            return ViewSpec::empty("histogram", title, message);
        }

        ViewSpec::new(
            "histogram",
            title,
            json!({
                "x_label": YEAR_AXIS,
                "color": self.palette.color(0),
                "buckets": report.year_histogram,
            }),
        )
    }

    fn regional_pie(&self, report: &DashboardReport<'_>) -> ViewSpec {
        let title = "Share of game sales by region";
        if report.regional_split.is_empty() {
            return ViewSpec::empty("pie", title, "No data to display in the regions chart.");
        }

        ViewSpec::new(
            "pie",
            title,
            json!({
                "names": "label",
                "values": "sales",
                "text_info": "percent+label",
                "colors": self.palette.take(report.regional_split.len()),
                "data": report.regional_split,
            }),
        )
    }

    fn company_lines(&self, report: &DashboardReport<'_>) -> ViewSpec {
        let title = "Global sales of the top 3 publishers over time";
        if report.company_series.is_empty() {
            return ViewSpec::empty("line", title, "No data to display in the publisher chart.");
        }

        let mut publishers: Vec<&str> = report
            .company_series
            .iter()
            .map(|row| row.publisher.as_str())
            .collect();
        publishers.sort_unstable();
        publishers.dedup();

        let series: Vec<Value> = publishers
            .iter()
            .enumerate()
            .map(|(i, publisher)| {
                let points: Vec<Value> = report
                    .company_series
                    .iter()
                    .filter(|row| row.publisher == *publisher)
                    .map(|row| json!({ "year": row.year, "global_sales": row.global_sales }))
                    .collect();
                json!({
                    "publisher": publisher,
                    "color": self.palette.color(i),
                    "points": points,
                })
            })
            .collect();

        ViewSpec::new(
            "line",
            title,
            json!({
                "x_label": YEAR_AXIS,
                "y_label": SALES_AXIS,
                "series": series,
            }),
        )
    }
}

fn metric(label: &str, value: String) -> ViewSpec {
    ViewSpec::new("metric", label, json!({ "label": label, "value": value }))
}

fn detail_table(report: &DashboardReport<'_>) -> ViewSpec {
    let title = "Detailed data";
    if report.is_empty() {
        return ViewSpec::empty("table", title, vg_views::NO_DATA_MESSAGE);
    }

    let mut columns = vec!["name", "year", "genre", "platform", "publisher"];
    columns.extend(SalesField::ALL.iter().map(|f| f.field_name()));

    ViewSpec::new(
        "table",
        title,
        json!({
            "columns": columns,
            "rows": report.view,
        }),
    )
}
