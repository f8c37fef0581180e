use crate::models::{Measurement, Station};

/// Immutable in-memory view of the dataset. Every query reads from one
/// snapshot without coordination; nothing mutates it after loading.
#[derive(Debug, Clone, Default)]
pub struct ClimateSnapshot {
    pub stations: Vec<Station>,
    pub measurements: Vec<Measurement>,
}

impl ClimateSnapshot {
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        Self {
            stations,
            measurements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
