//! Sales split across the four sales regions

use serde::Serialize;
use vg_core::SalesField;

use crate::filter::FilteredView;

/// A sales region of the pie chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    NorthAmerica,
    Europe,
    Japan,
    Other,
}

impl Region {
    /// Regions in chart order
    pub const ALL: [Region; 4] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Japan,
        Region::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Japan => "Japan",
            Region::Other => "Other",
        }
    }

    /// Record column summed for this region
    pub fn field(&self) -> SalesField {
        match self {
            Region::NorthAmerica => SalesField::NorthAmerica,
            Region::Europe => SalesField::Europe,
            Region::Japan => SalesField::Japan,
            Region::Other => SalesField::Other,
        }
    }
}

/// Summed sales of one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSales {
    pub region: Region,
    pub label: &'static str,
    pub sales: f64,
}

/// Four region totals in fixed order, zero where a region sold nothing.
/// An empty view yields an empty table.
pub fn regional_split(view: &FilteredView<'_>) -> Vec<RegionSales> {
    if view.is_empty() {
        return Vec::new();
    }

    Region::ALL
        .iter()
        .map(|region| RegionSales {
            region: *region,
            label: region.label(),
            sales: view.iter().map(|r| r.sales(region.field())).sum(),
        })
        .collect()
}
