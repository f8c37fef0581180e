use chrono::{Duration, NaiveDate};

use crate::error::{QueryError, Result};
use crate::models::Measurement;
use crate::utils::constants::LOOKBACK_DAYS;

/// The trailing analysis window: the latest observed date and the date 365
/// calendar days before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisWindow {
    pub latest_date: NaiveDate,
    pub start_date: NaiveDate,
}

/// Derive the trailing-year window from the dataset.
///
/// `start_date` is a plain 365-day subtraction from the maximum observed
/// date; there is no leap-year adjustment. The window is recomputed on every
/// call rather than cached, since the dataset is small and static.
pub fn last_year_window(measurements: &[Measurement]) -> Result<AnalysisWindow> {
    let latest_date = measurements
        .iter()
        .map(|m| m.date)
        .max()
        .ok_or_else(|| {
            QueryError::EmptyDataset("cannot derive analysis window without measurements".to_string())
        })?;

    Ok(AnalysisWindow {
        latest_date,
        start_date: latest_date - Duration::days(LOOKBACK_DAYS),
    })
}
