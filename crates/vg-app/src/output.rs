//! Terminal and JSON rendering of a dashboard report

use std::io::{self, Write};

use anyhow::Result;
use vg_data::{records_to_batch, ColumnMapping};
use vg_templates::ViewSpec;
use vg_views::{DashboardReport, NO_DATA_MESSAGE};

/// Report plus view specs as one pretty-printed JSON document
pub fn to_json(report: &DashboardReport<'_>, views: &[ViewSpec]) -> Result<String> {
    let document = serde_json::json!({
        "report": report,
        "views": views,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

/// KPI tiles followed by the aggregation tables
pub fn write_text<W: Write>(
    out: &mut W,
    report: &DashboardReport<'_>,
    views: &[ViewSpec],
) -> io::Result<()> {
    for spec in views.iter().filter(|s| s.view_type == "metric") {
        let value = spec.config["value"].as_str().unwrap_or_default();
        writeln!(out, "{:<20} {}", format!("{}:", spec.title), value)?;
    }

    if report.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Top genres by global sales")?;
    for row in &report.genre_ranking {
        writeln!(out, "  {:<20} {:>10.2}", row.genre, row.global_sales)?;
    }

    writeln!(out)?;
    writeln!(out, "Releases per year")?;
    for bucket in &report.year_histogram {
        let years = if bucket.start == bucket.end {
            bucket.start.to_string()
        } else {
            format!("{}-{}", bucket.start, bucket.end)
        };
        writeln!(out, "  {:<20} {:>10}", years, bucket.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Sales by region")?;
    for region in &report.regional_split {
        writeln!(out, "  {:<20} {:>10.2}", region.label, region.sales)?;
    }

    writeln!(out)?;
    writeln!(out, "Top publishers by year")?;
    for row in &report.company_series {
        writeln!(out, "  {:<6} {:<30} {:>10.2}", row.year, row.publisher, row.global_sales)?;
    }

    Ok(())
}

/// The filtered records as an ASCII table, headed like the source file
pub fn rows_table(report: &DashboardReport<'_>, mapping: &ColumnMapping) -> Result<String> {
    let batch = records_to_batch(report.view.records(), mapping)?;
    Ok(arrow::util::pretty::pretty_format_batches(&[batch])?.to_string())
}
