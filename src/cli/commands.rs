use serde::Serialize;
use tracing::Level;

use crate::cli::args::{Cli, Commands};
use crate::error::{QueryError, Result};
use crate::queries::parse_date;
use crate::readers::DatasetReader;
use crate::service::ClimateService;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let reader = DatasetReader::new(&cli.data_dir);
    let snapshot = reader.load().await?;
    let service = ClimateService::new(snapshot);

    match cli.command {
        Commands::Precipitation => {
            print_json(&service.precipitation_last_year()?, cli.pretty)?;
        }

        Commands::Stations => {
            print_json(&service.list_stations(), cli.pretty)?;
        }

        Commands::Tobs => {
            print_json(&service.temps_most_active_last_year()?, cli.pretty)?;
        }

        Commands::Stats {
            start,
            end,
            station,
        } => {
            let start = match parse_date(&start) {
                Ok(date) => date,
                Err(err) => return reject(err),
            };
            let end = match end.as_deref().map(parse_date).transpose() {
                Ok(date) => date,
                Err(err) => return reject(err),
            };

            let stats = service.temperature_stats(start, end, station.as_deref());
            print_json(&stats, cli.pretty)?;
        }

        Commands::Info => {
            println!("{}", service.dataset_summary().summary());
        }
    }

    Ok(())
}

/// Render a malformed-request error as a structured JSON response and exit
/// with a client-error status, keeping it distinct from operational
/// failures.
fn reject(err: QueryError) -> Result<()> {
    match err.client_response() {
        Some(response) => {
            println!("{}", serde_json::to_string(&response)?);
            std::process::exit(2);
        }
        None => Err(err),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
