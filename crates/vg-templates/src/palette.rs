//! Categorical colours shared by every chart of a dashboard

use serde::{Deserialize, Serialize};

/// D3 Category10
const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Ordered colour sequence, cycled when a chart has more categories than colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette from hex colour strings. An empty list falls back to the default.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            tracing::warn!("Empty palette given, using the default colours");
            return Self::default();
        }
        Self { colors }
    }

    /// Colour of the `index`-th category
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// The first `n` colours, wrapping around
    pub fn take(&self, n: usize) -> Vec<&str> {
        (0..n).map(|i| self.color(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: CATEGORY10.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl From<Vec<String>> for Palette {
    fn from(colors: Vec<String>) -> Self {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
