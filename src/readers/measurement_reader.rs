use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::models::Measurement;

pub struct MeasurementReader;

impl MeasurementReader {
    pub fn new() -> Self {
        Self
    }

    /// Read daily observations from a CSV file with the header
    /// `station,date,prcp,tobs`. An empty `prcp` field means no
    /// precipitation measurement was taken that day and deserializes to
    /// `None`.
    pub fn read_measurements(&self, path: &Path) -> Result<Vec<Measurement>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut measurements = Vec::new();

        for row in reader.deserialize() {
            let measurement: Measurement = row?;
            measurements.push(measurement);
        }

        tracing::debug!(count = measurements.len(), "loaded measurements");
        Ok(measurements)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_measurements_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "station,date,prcp,tobs")?;
        writeln!(temp_file, "USC00519397,2016-08-23,0.0,79.0")?;
        writeln!(temp_file, "USC00519397,2017-08-23,,80.0")?;

        let reader = MeasurementReader::new();
        let measurements = reader.read_measurements(temp_file.path())?;

        assert_eq!(measurements.len(), 2);
        assert_eq!(measurements[0].prcp, Some(0.0));
        assert_eq!(measurements[1].prcp, None);
        assert_eq!(
            measurements[1].date,
            NaiveDate::from_ymd_opt(2017, 8, 23).unwrap()
        );
        assert_eq!(measurements[1].tobs, 80.0);

        Ok(())
    }

    #[test]
    fn test_malformed_row_is_an_error() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "station,date,prcp,tobs")?;
        writeln!(temp_file, "USC00519397,not-a-date,0.0,79.0")?;

        let reader = MeasurementReader::new();
        assert!(reader.read_measurements(temp_file.path()).is_err());

        Ok(())
    }
}
