use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::ClimateSnapshot;
use crate::readers::{MeasurementReader, StationReader};
use crate::utils::constants::{MEASUREMENTS_FILE, STATIONS_FILE};

/// Loads the station and measurement files from a data directory into one
/// immutable snapshot. Both files are read concurrently; file handles are
/// scoped to the read and released on every exit path.
pub struct DatasetReader {
    data_dir: PathBuf,
}

impl DatasetReader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub fn stations_path(&self) -> PathBuf {
        self.data_dir.join(STATIONS_FILE)
    }

    pub fn measurements_path(&self) -> PathBuf {
        self.data_dir.join(MEASUREMENTS_FILE)
    }

    pub async fn load(&self) -> Result<ClimateSnapshot> {
        let stations_path = self.stations_path();
        let measurements_path = self.measurements_path();

        let stations_handle = tokio::task::spawn_blocking(move || {
            StationReader::new().read_stations(&stations_path)
        });
        let measurements_handle = tokio::task::spawn_blocking(move || {
            MeasurementReader::new().read_measurements(&measurements_path)
        });

        let (stations, measurements) = tokio::try_join!(stations_handle, measurements_handle)?;
        let snapshot = ClimateSnapshot::new(stations?, measurements?);

        tracing::info!(
            stations = snapshot.stations.len(),
            measurements = snapshot.measurements.len(),
            "dataset loaded"
        );

        Ok(snapshot)
    }
}
