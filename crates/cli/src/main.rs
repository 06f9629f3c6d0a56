//! # spectral
//!
//! Command-line interface for spectral seasonality analysis of hourly
//! generation series.

use clap::{Args, Parser, Subcommand};
use data_facade::{
    export_decomposition, export_series, CsvColumnSource, SeriesSource, SyntheticConfig,
    SyntheticProfile,
};
use spectral_facade::{spectrum_report, AnalysisConfig, SeasonalDecomposer, SpectrumReport};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "spectral=info,spectral_core=info,spectral_api=info,data_core=info";

#[derive(Parser)]
#[command(name = "spectral")]
#[command(about = "Spectral seasonality analysis CLI", long_about = None)]
struct Cli {
    /// JSON analysis configuration; command flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Where the analyzed series comes from
#[derive(Args)]
struct InputArgs {
    /// Input CSV file with a header row
    #[arg(short, long, requires = "column", conflicts_with = "synthetic_hours")]
    input: Option<PathBuf>,

    /// Column name holding the series values
    #[arg(short, long)]
    column: Option<String>,

    /// Analyze a synthetic generation profile of this many hours instead of a file
    #[arg(long)]
    synthetic_hours: Option<usize>,

    /// Seed for the synthetic profile noise
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the dominant frequencies of a series
    Frequencies {
        #[command(flatten)]
        source: InputArgs,

        /// Number of bins to report
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split a series into trend, seasonal, and residual components
    Decompose {
        #[command(flatten)]
        source: InputArgs,

        /// Samples per cycle
        #[arg(short, long)]
        period: Option<usize>,

        /// Output CSV for the leading decomposition rows
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of rows to export
        #[arg(long)]
        rows: Option<usize>,
    },

    /// Write a synthetic hourly generation series
    Generate {
        /// Number of hourly samples
        #[arg(long, default_value = "2160")]
        hours: usize,

        /// Noise seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Load the analysis configuration, or defaults when no file is given
fn load_config(path: Option<&PathBuf>) -> CliResult<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let text =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config {:?}: {}", path, e))?;
    let config = AnalysisConfig::from_json(&text)
        .map_err(|e| format!("Invalid config {:?}: {}", path, e))?;
    info!(path = %path.display(), "loaded analysis config");
    Ok(config)
}

/// Resolve the input arguments into series values
fn load_series(source: &InputArgs) -> CliResult<Vec<f64>> {
    let series = match (&source.input, source.synthetic_hours) {
        (Some(path), _) => {
            let column = source
                .column
                .as_deref()
                .ok_or_else(|| "--column is required with --input".to_string())?;
            CsvColumnSource::new(path, column)
                .load()
                .map_err(|e| e.to_string())?
        }
        (None, Some(hours)) => {
            let config = SyntheticConfig {
                hours,
                seed: source.seed,
                ..SyntheticConfig::default()
            };
            SyntheticProfile::new(config)
                .and_then(|profile| profile.load())
                .map_err(|e| e.to_string())?
        }
        (None, None) => return Err("Either --input or --synthetic-hours is required".to_string()),
    };

    info!(samples = series.len(), source = %series.name, "series loaded");
    Ok(series.into_values())
}

/// Render a spectrum report as pretty JSON or as a ranked text listing
fn render_spectrum(report: &SpectrumReport, json: bool) -> CliResult<String> {
    if json {
        return serde_json::to_string_pretty(report).map_err(|e| e.to_string());
    }
    let mut out = format!(
        "Transform length: {} (signal length {})\nDominant frequencies:",
        report.transform_len, report.signal_len
    );
    for f in &report.frequencies {
        out.push_str(&format!(
            "\n  {}. bin {} (period: {:.1} samples, magnitude: {:.2})",
            f.rank, f.bin, f.period, f.magnitude
        ));
    }
    Ok(out)
}

/// Everything `frequencies` writes to stdout
fn frequencies_output(
    mut config: AnalysisConfig,
    source: &InputArgs,
    top_k: Option<usize>,
    json: bool,
) -> CliResult<String> {
    if let Some(k) = top_k {
        config.top_k = k;
    }
    let data = load_series(source)?;
    let report = spectrum_report(&data, config.top_k).map_err(|e| e.to_string())?;
    render_spectrum(&report, json)
}

fn run_frequencies(
    config: AnalysisConfig,
    source: InputArgs,
    top_k: Option<usize>,
    json: bool,
) -> CliResult<()> {
    println!("{}", frequencies_output(config, &source, top_k, json)?);
    Ok(())
}

fn run_decompose(
    mut config: AnalysisConfig,
    source: InputArgs,
    period: Option<usize>,
    output: Option<PathBuf>,
    rows: Option<usize>,
) -> CliResult<()> {
    if let Some(p) = period {
        config.decomposition.period = p;
    }
    if let Some(r) = rows {
        config.export.rows = r;
    }
    config.validate().map_err(|e| e.to_string())?;

    let data = load_series(&source)?;
    let decomposer = SeasonalDecomposer::with_harmonics(config.decomposition.harmonics)
        .map_err(|e| e.to_string())?;
    let decomposition = decomposer
        .analyze(&data, config.decomposition.period)
        .map_err(|e| e.to_string())?;

    println!("Period: {} samples", decomposition.period());
    println!(
        "Seasonality Strength: {:.3}%",
        decomposition.seasonality_strength() * 100.0
    );

    if let Some(path) = output {
        let exported = decomposition.rows(config.export.rows);
        export_decomposition(&path, &exported).map_err(|e| e.to_string())?;
        println!("{} rows written to {:?}", exported.len(), path);
    }
    Ok(())
}

fn run_generate(hours: usize, seed: Option<u64>, output: PathBuf) -> CliResult<()> {
    let config = SyntheticConfig {
        hours,
        seed,
        ..SyntheticConfig::default()
    };
    let values = SyntheticProfile::new(config)
        .map_err(|e| e.to_string())?
        .generate();
    export_series(&output, &values).map_err(|e| e.to_string())?;
    println!("Generated {} hours, written to {:?}", values.len(), output);
    Ok(())
}

fn run(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Frequencies {
            source,
            top_k,
            json,
        } => run_frequencies(config, source, top_k, json),

        Commands::Decompose {
            source,
            period,
            output,
            rows,
        } => run_decompose(config, source, period, output, rows),

        Commands::Generate {
            hours,
            seed,
            output,
        } => run_generate(hours, seed, output),
    }
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
