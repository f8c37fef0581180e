/// File names expected inside the data directory
pub const STATIONS_FILE: &str = "stations.csv";
pub const MEASUREMENTS_FILE: &str = "measurements.csv";

/// Length of the trailing analysis window, in calendar days
pub const LOOKBACK_DAYS: i64 = 365;

/// Date input format accepted from callers
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
pub const EXPECTED_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Station coordinate bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
