pub mod activity;
pub mod aggregate;
pub mod date_input;
pub mod projection;
pub mod window;

pub use activity::most_active_station;
pub use aggregate::{aggregate_temperatures, TemperatureSummary};
pub use date_input::parse_date;
pub use projection::{
    precipitation_since, station_temperatures_since, PrecipitationRow, TemperatureRow,
};
pub use window::{last_year_window, AnalysisWindow};
