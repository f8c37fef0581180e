use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{QueryError, Result};
use crate::models::Measurement;

/// Find the station with the most observations strictly after `after`.
///
/// Ties on the observation count are broken by taking the lexicographically
/// smallest station id, so the result is deterministic regardless of input
/// or hash-map iteration order.
pub fn most_active_station(measurements: &[Measurement], after: NaiveDate) -> Result<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for m in measurements.iter().filter(|m| m.date > after) {
        *counts.entry(m.station_id.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|(a_id, a_count), (b_id, b_count)| {
            a_count.cmp(b_count).then_with(|| b_id.cmp(a_id))
        })
        .map(|(station_id, _)| station_id.to_string())
        .ok_or_else(|| {
            QueryError::EmptyDataset(format!("no observations recorded after {}", after))
        })
}
