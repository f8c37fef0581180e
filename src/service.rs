use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{ClimateSnapshot, Station};
use crate::queries::{
    aggregate_temperatures, last_year_window, most_active_station, precipitation_since,
    station_temperatures_since, PrecipitationRow, TemperatureRow, TemperatureSummary,
};

/// High-level query operations over one immutable dataset snapshot.
///
/// Every method is a pure read; independent callers can share a service
/// through a reference without coordination.
pub struct ClimateService {
    snapshot: ClimateSnapshot,
}

impl ClimateService {
    pub fn new(snapshot: ClimateSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &ClimateSnapshot {
        &self.snapshot
    }

    /// Precipitation readings strictly after the start of the trailing
    /// 365-day analysis window.
    pub fn precipitation_last_year(&self) -> Result<Vec<PrecipitationRow>> {
        let window = last_year_window(&self.snapshot.measurements)?;
        Ok(precipitation_since(
            &self.snapshot.measurements,
            window.start_date,
        ))
    }

    /// All known stations, in load order.
    pub fn list_stations(&self) -> &[Station] {
        &self.snapshot.stations
    }

    /// Temperature observations of the most active station over the
    /// trailing 365-day window.
    pub fn temps_most_active_last_year(&self) -> Result<Vec<TemperatureRow>> {
        let window = last_year_window(&self.snapshot.measurements)?;
        let station_id = most_active_station(&self.snapshot.measurements, window.start_date)?;

        tracing::debug!(%station_id, "most active station in trailing year");

        Ok(station_temperatures_since(
            &self.snapshot.measurements,
            &station_id,
            window.start_date,
        ))
    }

    /// Min/avg/max temperature statistics from `start`, optionally bounded
    /// by an inclusive `end` date and restricted to one station. Returns a
    /// one-element array per the published contract; an empty filtered set
    /// yields null statistics, not an error.
    pub fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
        station_id: Option<&str>,
    ) -> Vec<TemperatureSummary> {
        vec![aggregate_temperatures(
            &self.snapshot.measurements,
            start,
            end,
            station_id,
        )]
    }

    pub fn dataset_summary(&self) -> DatasetSummary {
        let measurements = &self.snapshot.measurements;
        let observed_stations: HashSet<&str> = measurements
            .iter()
            .map(|m| m.station_id.as_str())
            .collect();
        let window = last_year_window(measurements).ok();

        DatasetSummary {
            total_measurements: measurements.len(),
            known_stations: self.snapshot.stations.len(),
            observed_stations: observed_stations.len(),
            earliest_date: measurements.iter().map(|m| m.date).min(),
            latest_date: window.map(|w| w.latest_date),
            window_start: window.map(|w| w.start_date),
        }
    }
}

/// Shape of the loaded dataset, for the `info` command.
#[derive(Debug)]
pub struct DatasetSummary {
    pub total_measurements: usize,
    pub known_stations: usize,
    pub observed_stations: usize,
    pub earliest_date: Option<NaiveDate>,
    pub latest_date: Option<NaiveDate>,
    pub window_start: Option<NaiveDate>,
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        let date_range = match (self.earliest_date, self.latest_date) {
            (Some(earliest), Some(latest)) => format!("{} to {}", earliest, latest),
            _ => "no observations".to_string(),
        };
        let window = match (self.window_start, self.latest_date) {
            (Some(start), Some(latest)) => format!("{} to {}", start, latest),
            _ => "unavailable".to_string(),
        };

        format!(
            "Measurements: {} total\n\
            Stations: {} known, {} with observations\n\
            Date Range: {}\n\
            Trailing-Year Window: {}",
            self.total_measurements,
            self.known_stations,
            self.observed_stations,
            date_range,
            window
        )
    }
}
