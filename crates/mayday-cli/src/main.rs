//! # Mayday CLI
//!
//! Loads a disaster table, runs every analysis and prints the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mayday_analytics::{ReportOptions, generate_report};
use mayday_domain::OperationPhase;
use mayday_ingest::read_disasters;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Config, ReportFormat};

#[derive(Parser, Debug)]
#[command(name = "mayday")]
#[command(about = "Aggregate statistics over historical aviation disasters")]
struct Args {
    /// Semicolon-delimited disaster table (defaults to MAYDAY_DATA_PATH)
    path: Option<PathBuf>,

    /// Number of entries in the ground-fatality ranking
    #[arg(short, long)]
    limit: Option<usize>,

    /// Only measure disaster-free periods for this operation phase
    #[arg(short, long)]
    phase: Option<String>,

    /// Highest fatality rate (0.0 - 1.0) counted in the phase statistics
    #[arg(short, long, value_parser = parse_ceiling)]
    ceiling: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,
}

/// Fatality rates are fractions, so the ceiling must lie in `0.0..=1.0`.
fn parse_ceiling(value: &str) -> std::result::Result<f64, String> {
    let ceiling: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=1.0).contains(&ceiling) {
        Ok(ceiling)
    } else {
        Err(format!("'{value}' is outside 0.0..=1.0"))
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let path = args.path.unwrap_or_else(|| config.data_path.clone());
    let options = ReportOptions {
        ranking_limit: args.limit.or(config.ranking_limit),
        phase: args.phase.map(OperationPhase::from),
        fatality_rate_ceiling: args.ceiling,
    };
    let format = args.format.unwrap_or(config.report_format);

    info!(path = %path.display(), ?options, ?format, "Starting disaster analysis");

    let records = read_disasters(&path)
        .with_context(|| format!("failed to load disasters from {}", path.display()))?;
    let report = generate_report(&records, &options).context("analysis failed")?;

    let output = match format {
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Markdown => report.to_markdown(),
    };
    println!("{output}");

    Ok(())
}
