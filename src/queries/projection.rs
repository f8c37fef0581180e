use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Measurement;

/// One precipitation reading. `prcp` stays nullable in the output; a null
/// means no measurement was taken that day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationRow {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

/// One temperature observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRow {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// Project precipitation readings strictly after `after`, preserving the
/// input order.
pub fn precipitation_since(measurements: &[Measurement], after: NaiveDate) -> Vec<PrecipitationRow> {
    measurements
        .iter()
        .filter(|m| m.date > after)
        .map(|m| PrecipitationRow {
            date: m.date,
            prcp: m.prcp,
        })
        .collect()
}

/// Project temperature observations for one station, strictly after `after`,
/// preserving the input order.
pub fn station_temperatures_since(
    measurements: &[Measurement],
    station_id: &str,
    after: NaiveDate,
) -> Vec<TemperatureRow> {
    measurements
        .iter()
        .filter(|m| m.station_id == station_id && m.date > after)
        .map(|m| TemperatureRow {
            date: m.date,
            tobs: m.tobs,
        })
        .collect()
}
