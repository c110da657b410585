//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use vg_core::{Dataset, FilterSelection};

#[derive(Parser, Debug)]
#[command(author, version, about = "Video game sales dashboard", long_about = None)]
pub struct Args {
    /// CSV file with one game sales record per row
    #[arg(short, long)]
    pub data: PathBuf,

    /// JSON settings file (column mapping, view sizes, palette)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Release year to keep, repeatable. All years when omitted.
    #[arg(long)]
    pub year: Vec<i32>,

    /// Genre to keep, repeatable. All genres when omitted.
    #[arg(long)]
    pub genre: Vec<String>,

    /// Platform to keep, repeatable. All platforms when omitted.
    #[arg(long)]
    pub platform: Vec<String>,

    /// Publisher to keep, repeatable. All publishers when omitted.
    #[arg(long)]
    pub publisher: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the filtered records as a table
    #[arg(long)]
    pub rows: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// KPIs and tables for a terminal
    Text,
    /// Report and view specs as JSON
    Json,
}

impl Args {
    /// Selection from the dimension flags; a dimension without flags keeps every observed value
    pub fn selection(&self, dataset: &Dataset) -> FilterSelection {
        let mut selection = FilterSelection::all(dataset);
        if !self.year.is_empty() {
            selection = selection.with_years(self.year.iter().copied());
        }
        if !self.genre.is_empty() {
            selection = selection.with_genres(self.genre.iter().cloned());
        }
        if !self.platform.is_empty() {
            selection = selection.with_platforms(self.platform.iter().cloned());
        }
        if !self.publisher.is_empty() {
            selection = selection.with_publishers(self.publisher.iter().cloned());
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_core::Record;

    fn record(name: &str, year: i32, genre: &str, platform: &str) -> Record {
        Record {
            name: name.to_string(),
            year,
            genre: genre.to_string(),
            platform: platform.to_string(),
            publisher: "Nintendo".to_string(),
            sales_na: 1.0,
            sales_eu: 1.0,
            sales_jp: 1.0,
            sales_other: 1.0,
            sales_global: 4.0,
        }
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["vgsales", "--data", "sales.csv"]).unwrap();
        assert_eq!(args.data, PathBuf::from("sales.csv"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.year.is_empty());
        assert!(!args.rows);
    }

    #[test]
    fn test_repeated_flags() {
        let args = Args::try_parse_from([
            "vgsales", "--data", "sales.csv", "--year", "2006", "--year", "2008", "--genre",
            "Sports",
            "--format", "json", "--rows",
        ])
        .unwrap();
        assert_eq!(args.year, vec![2006, 2008]);
        assert_eq!(args.genre, vec!["Sports"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.rows);
    }

    #[test]
    fn test_data_is_required() {
        assert!(Args::try_parse_from(["vgsales"]).is_err());
    }

    #[test]
    fn test_selection_narrows_only_given_dimensions() {
        let dataset = Dataset::new(vec![
            record("Wii Sports", 2006, "Sports", "Wii"),
            record("Mario Kart Wii", 2008, "Racing", "Wii"),
            record("Tetris", 1989, "Puzzle", "GB"),
        ])
        .unwrap();

        let args =
            Args::try_parse_from(["vgsales", "--data", "x.csv", "--platform", "Wii"]).unwrap();
        let selection = args.selection(&dataset);

        let kept: Vec<_> = dataset
            .iter()
            .filter(|r| selection.admits(r))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(kept, vec!["Wii Sports", "Mario Kart Wii"]);
    }
}
