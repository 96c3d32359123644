//! # sales-forecast CLI
//!
//! Forecast aggregated monthly revenue from a product export, print a
//! dashboard report, or run the HTTP forecast service.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sales_forecast::chart::ForecastChart;
use sales_forecast::config::{validate_horizon, ForecastConfig};
use sales_forecast::models::{Forecaster, LinearTrend};
use sales_forecast::sales::{load_products, monthly_revenue, Insights};
use sales_forecast::server;
use sales_forecast::utils::calculate_metrics;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "sales-forecast")]
#[command(about = "Monthly revenue forecasting for product sales", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the revenue + forecast chart payload as JSON
    Forecast {
        /// Products JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of months to forecast
        #[arg(long)]
        horizon: Option<usize>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print dashboard insights and trend fit quality
    Report {
        /// Products JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of months to forecast
        #[arg(long)]
        horizon: Option<usize>,
    },

    /// Start the HTTP forecast service
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sales_forecast=debug,tower_http=debug"
    } else {
        "sales_forecast=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn resolve_horizon(config: &ForecastConfig, horizon: Option<usize>) -> anyhow::Result<usize> {
    let horizon = horizon.unwrap_or(config.horizon);
    validate_horizon(horizon)?;
    Ok(horizon)
}

fn run_forecast(
    config: &ForecastConfig,
    input: PathBuf,
    horizon: Option<usize>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let horizon = resolve_horizon(config, horizon)?;
    let products =
        load_products(&input).with_context(|| format!("reading {}", input.display()))?;
    let series = monthly_revenue(&products)?;
    series.ensure_finite()?;

    let chart = ForecastChart::build(&series, horizon);
    let json = serde_json::to_string_pretty(&chart)?;

    match output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), months = series.len(), horizon, "wrote forecast chart");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_report(
    config: &ForecastConfig,
    input: PathBuf,
    horizon: Option<usize>,
) -> anyhow::Result<()> {
    let horizon = resolve_horizon(config, horizon)?;
    let products =
        load_products(&input).with_context(|| format!("reading {}", input.display()))?;

    let insights = Insights::from_products(&products, horizon)?;
    println!("{insights}");

    let series = monthly_revenue(&products)?;
    let mut model = LinearTrend::new();
    model.fit(&series)?;

    if let (Some(line), Some(fitted)) = (model.line(), model.fitted_values()) {
        println!(
            "Trend: {:+.2} per month (from {:.2} at {})",
            line.slope,
            line.intercept,
            series.labels().first().map(String::as_str).unwrap_or("-")
        );
        let metrics = calculate_metrics(series.values(), fitted)?;
        println!("Fit: {metrics}");
    } else {
        println!("Trend: not enough months of history");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ForecastConfig::from_env()?;

    match cli.command {
        Commands::Forecast {
            input,
            horizon,
            output,
        } => run_forecast(&config, input, horizon, output),
        Commands::Report { input, horizon } => run_report(&config, input, horizon),
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            server::serve(config).await?;
            Ok(())
        }
    }
}
