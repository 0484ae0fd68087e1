// File: crates/demo/src/main.rs
// Summary: Demo CLI: loads day-bucketed readings from CSV (plus optional treatments JSON
// and TOML config) and renders the glucose chart to a PNG.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, TimeZone};
use clap::{Parser, ValueEnum};
use glucose_chart_core::{ChartConfig, ChartPainter, DaySeries, Reading, TreatmentStore};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Watch,
    Phone,
}

#[derive(Parser, Debug)]
#[command(name = "glucose-chart", about = "Render a multi-day glucose chart to PNG")]
struct Cli {
    /// CSV with columns day,timestamp,value,metered,valid (day 0 = today).
    #[arg(long)]
    readings: PathBuf,

    /// Nightscout treatments JSON array.
    #[arg(long)]
    treatments: Option<PathBuf>,

    /// TOML chart config; overrides --preset.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Preset::Phone)]
    preset: Preset,

    #[arg(long, default_value = "target/out/chart.png")]
    out: PathBuf,

    /// Fixed "now" in epoch milliseconds; defaults to the local clock.
    #[arg(long)]
    now_ms: Option<i64>,
}

/// One CSV row.
#[derive(Debug, Deserialize)]
struct Row {
    day: usize,
    timestamp: f64,
    value: f64,
    #[serde(default)]
    metered: bool,
    #[serde(default = "default_valid")]
    valid: bool,
}

fn default_valid() -> bool {
    true
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let cli = Cli::parse();

    let now: DateTime<Local> = match cli.now_ms {
        Some(ms) => Local
            .timestamp_millis_opt(ms)
            .single()
            .with_context(|| format!("--now-ms {ms} is not a representable local time"))?,
        None => Local::now(),
    };
    let now_ms = now.timestamp_millis() as f64;

    let config = match &cli.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => {
            let cfg = match cli.preset {
                Preset::Watch => ChartConfig::watch(),
                Preset::Phone => ChartConfig::phone(),
            };
            cfg.validate()?;
            cfg
        }
    };

    let days = load_days(&cli.readings).with_context(|| format!("failed to load CSV '{}'", cli.readings.display()))?;
    let total: usize = days.iter().map(Vec::len).sum();
    tracing::info!(days = days.len(), readings = total, "loaded readings");

    let treatments = match &cli.treatments {
        Some(path) => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let mut store = TreatmentStore::new();
            let accepted = store.ingest_json(&raw, now_ms)?;
            let today = store.todays(&now);
            tracing::info!(accepted, today = today.len(), "loaded treatments");
            today
        }
        None => Vec::new(),
    };

    let units = config.units;
    let chart = ChartPainter::new(config).render_at(&days, &treatments, &now);
    if chart.is_empty() {
        bail!("nothing to draw: need at least two days with one of them holding two or more readings");
    }
    chart.image.write_png(&cli.out)?;

    println!("Wrote {}", cli.out.display());
    println!("current value x: {}", chart.current_value_x);
    if let Some(latest) = days.first().and_then(|today| today.last()) {
        println!("latest reading: {} {}", units.format(latest.value), units.suffix());
    }
    Ok(())
}

/// Group CSV rows into day series, keeping file order within a day.
fn load_days(path: &Path) -> Result<Vec<DaySeries>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut days: Vec<DaySeries> = Vec::new();
    for (line, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("row {}", line + 2))?;
        if days.len() <= row.day {
            days.resize_with(row.day + 1, Vec::new);
        }
        days[row.day].push(Reading {
            timestamp: row.timestamp,
            value: row.value,
            is_metered: row.metered,
            is_valid: row.valid,
        });
    }
    Ok(days)
}
