use serde::{Deserialize, Serialize};
use validator::Validate;

/// Static reference metadata for a weather station. Loaded once at startup
/// and immutable for the process lifetime.
///
/// The identifier serializes as `station` to match the published JSON
/// contract of the list-stations operation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Station {
    #[serde(rename = "station")]
    #[validate(length(min = 1))]
    pub station_id: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: f64,
}

impl Station {
    pub fn new(
        station_id: String,
        name: String,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            station_id,
            name,
            latitude,
            longitude,
            elevation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_validation() {
        let station = Station::new(
            "USC00519397".to_string(),
            "WAIKIKI 717.2, HI US".to_string(),
            21.2716,
            -157.8168,
            3.0,
        );

        assert!(station.validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        let station = Station::new(
            "USC00519397".to_string(),
            "Invalid Station".to_string(),
            91.0, // Invalid latitude
            -157.8168,
            3.0,
        );

        assert!(station.validate().is_err());
    }

    #[test]
    fn test_station_serializes_with_contract_field_names() {
        let station = Station::new(
            "USC00519397".to_string(),
            "WAIKIKI 717.2, HI US".to_string(),
            21.2716,
            -157.8168,
            3.0,
        );

        let value = serde_json::to_value(&station).unwrap();
        assert_eq!(value["station"], "USC00519397");
        assert_eq!(value["name"], "WAIKIKI 717.2, HI US");
        assert!(value.get("station_id").is_none());
    }
}
