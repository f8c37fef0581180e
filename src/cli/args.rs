use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-query")]
#[command(about = "Read-only aggregate queries over daily weather station observations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short,
        long,
        global = true,
        default_value = "data",
        help = "Directory containing stations.csv and measurements.csv"
    )]
    pub data_dir: PathBuf,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Precipitation readings for the trailing 365-day window
    Precipitation,

    /// List all weather stations
    Stations,

    /// Temperature observations of the most active station over the trailing year
    Tobs,

    /// Min/avg/max temperature statistics from a start date
    Stats {
        #[arg(help = "Start date, inclusive (YYYY-MM-DD)")]
        start: String,

        #[arg(help = "End date, inclusive (YYYY-MM-DD); unbounded if omitted")]
        end: Option<String>,

        #[arg(short, long, help = "Restrict statistics to one station id")]
        station: Option<String>,
    },

    /// Summarize the loaded dataset
    Info,
}
