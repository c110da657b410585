//! Dashboard descriptions for an external chart renderer
//!
//! A [`DashboardTemplate`] turns a [`vg_views::DashboardReport`] into an
//! ordered list of [`ViewSpec`]s. Colours come from an explicit [`Palette`]
//! rather than global state.

mod dashboard;
mod palette;

pub use dashboard::DashboardTemplate;
pub use palette::Palette;

use serde::{Deserialize, Serialize};

/// Specification for creating a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
    pub view_type: String,
    pub title: String,
    pub config: serde_json::Value,
}

impl ViewSpec {
    pub fn new(
        view_type: impl Into<String>,
        title: impl Into<String>,
        config: serde_json::Value,
    ) -> Self {
        Self {
            view_type: view_type.into(),
            title: title.into(),
            config,
        }
    }

    /// A view with nothing to plot, carrying the message shown instead
    pub fn empty(view_type: impl Into<String>, title: impl Into<String>, message: &str) -> Self {
        Self::new(
            view_type,
            title,
            serde_json::json!({ "empty": true, "message": message }),
        )
    }

    /// True for specs built by [`ViewSpec::empty`]
    pub fn is_empty(&self) -> bool {
        self.config.get("empty").and_then(|v| v.as_bool()).unwrap_or(false)
    }
}
