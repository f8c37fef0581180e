use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily observation recorded by a weather station. Append-only
/// reference data; queries never mutate measurements.
///
/// `prcp` is `None` when no precipitation measurement was taken that day,
/// which is distinct from a recorded value of zero rainfall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    #[serde(rename = "station")]
    pub station_id: String,
    pub date: NaiveDate,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

impl Measurement {
    pub fn new(station_id: &str, date: NaiveDate, prcp: Option<f64>, tobs: f64) -> Self {
        Self {
            station_id: station_id.to_string(),
            date,
            prcp,
            tobs,
        }
    }
}
