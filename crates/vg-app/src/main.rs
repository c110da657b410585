//! `vgsales`: headless video game sales dashboard

mod cli;
mod output;
mod settings;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use vg_core::DatasetSource;
use vg_data::CsvSource;
use vg_templates::DashboardTemplate;
use vg_views::DashboardReport;

use cli::{Args, OutputFormat};
use settings::Settings;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;

    let source = CsvSource::new(&args.data, settings.load.clone());
    let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
    let dataset = runtime
        .block_on(source.load())
        .with_context(|| format!("Failed to load {:?}", source.path()))?;
    info!("Loaded {} records from {}", dataset.len(), source.source_name());

    let selection = args.selection(&dataset);
    let report = DashboardReport::build(&dataset, &selection, &settings.views);
    let views = DashboardTemplate::new(settings.palette.clone()).build(&report);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            output::write_text(&mut out, &report, &views)?;
            if args.rows && !report.is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", output::rows_table(&report, &settings.load.columns)?)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", output::to_json(&report, &views)?)?;
        }
    }
    out.flush()?;

    Ok(())
}
