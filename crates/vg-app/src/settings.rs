//! Settings file for the dashboard binary

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vg_data::LoadConfig;
use vg_templates::Palette;
use vg_views::ViewConfig;

/// Everything configurable from one JSON file. Each section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub load: LoadConfig,
    pub views: ViewConfig,
    pub palette: Palette,
}

impl Settings {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("Invalid settings in {:?}", path))?;
        settings.load.delimiter_byte()?;
        Ok(settings)
    }

    /// Settings from `path`, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading settings from {:?}", path);
                Self::from_json_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
