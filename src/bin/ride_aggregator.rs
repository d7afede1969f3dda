//! Ride price aggregator command line.
//!
//! Run with:
//! ```bash
//! ride-aggregator 51.470020,-0.454295 51.00000,1.0000 4
//! ride-aggregator -s dave 51.470020,-0.454295 51.00000,1.0000
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use ride_aggregator::application::services::RideAggregationEngine;
use ride_aggregator::config::Settings;
use ride_aggregator::domain::entities::{RideOption, RideQuery};
use ride_aggregator::telemetry::{LogFormat, init_tracing};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ride-aggregator")]
#[command(about = "Find the cheapest rides across suppliers")]
struct Args {
    /// Pickup location as `latitude,longitude`
    #[arg(allow_hyphen_values = true)]
    pickup: String,

    /// Dropoff location as `latitude,longitude`
    #[arg(allow_hyphen_values = true)]
    dropoff: String,

    /// Number of passengers to seat
    passengers: Option<u32>,

    /// Only list this supplier's options
    #[arg(short, long)]
    supplier: Option<String>,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "RIDE_AGGREGATOR_LOG_JSON")]
    log_json: bool,
}

/// How a run ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    InvalidInput,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::InvalidInput => ExitCode::from(2),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_tracing(format).context("failed to initialize tracing")?;

    let settings = Settings::load().context("failed to load settings")?;
    debug!(?settings, "loaded settings");
    let engine = RideAggregationEngine::from_settings(&settings)?;

    let status = run(&args, &engine, &mut io::stdout()).await?;
    Ok(status.into())
}

/// Validates the query, asks the engine and writes one line per option.
///
/// Invalid coordinates and unknown suppliers are reported on stderr and
/// nothing is written to `out`.
async fn run(args: &Args, engine: &RideAggregationEngine, out: &mut impl Write) -> Result<Status> {
    let query = match RideQuery::new(args.pickup.as_str(), args.dropoff.as_str(), args.passengers) {
        Ok(query) => query,
        Err(error) => {
            eprintln!("{error}");
            return Ok(Status::InvalidInput);
        }
    };

    let options = match &args.supplier {
        Some(supplier) => match engine.supplier_options(supplier, &query).await {
            Ok(options) => options,
            Err(error) if error.is_input_validation() => {
                eprintln!("{error}");
                return Ok(Status::InvalidInput);
            }
            Err(error) => return Err(error.into()),
        },
        None => engine.cheapest_per_category(&query).await,
    };

    write_options(out, &options, args.json)?;
    Ok(Status::Success)
}

fn write_options(out: &mut impl Write, options: &[RideOption], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, options)?;
        writeln!(out)?;
        return Ok(());
    }
    for option in options {
        writeln!(out, "{option}")?;
    }
    Ok(())
}
