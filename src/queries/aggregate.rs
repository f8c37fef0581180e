use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Measurement;

/// Min/avg/max temperature statistics over a filtered row set.
///
/// All three fields are `None` when no rows matched the filter. That is a
/// defined success result, not an error, and serializes as JSON nulls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureSummary {
    pub fn empty() -> Self {
        Self {
            min: None,
            avg: None,
            max: None,
        }
    }
}

/// Compute temperature statistics over measurements matching
/// `date >= start`, an optional inclusive `date <= end` bound, and an
/// optional station filter.
///
/// Note the inclusive bounds here, in contrast to the strict `>` filter the
/// trailing-year operations use. The asymmetry is intentional and matches
/// the published behavior of the stats operations.
pub fn aggregate_temperatures(
    measurements: &[Measurement],
    start: NaiveDate,
    end: Option<NaiveDate>,
    station_id: Option<&str>,
) -> TemperatureSummary {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for m in measurements {
        if m.date < start {
            continue;
        }
        if end.is_some_and(|end| m.date > end) {
            continue;
        }
        if station_id.is_some_and(|id| m.station_id != id) {
            continue;
        }

        min = min.min(m.tobs);
        max = max.max(m.tobs);
        sum += m.tobs;
        count += 1;
    }

    if count == 0 {
        return TemperatureSummary::empty();
    }

    TemperatureSummary {
        min: Some(min),
        avg: Some(sum / count as f64),
        max: Some(max),
    }
}
