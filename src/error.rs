use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("'{input}' is not a valid date in the format {expected_format}")]
    InvalidDate {
        input: String,
        expected_format: &'static str,
    },

    #[error("No measurements available: {0}")]
    EmptyDataset(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Station validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Client-facing rendering of a request validation failure, returned to the
/// caller instead of propagating the fault.
#[derive(Debug, Serialize)]
pub struct ClientErrorResponse {
    pub error: String,
    pub input: String,
    pub expected_format: String,
}

impl QueryError {
    /// Returns the structured client response for errors caused by malformed
    /// request input. Operational errors (I/O, empty dataset) return `None`
    /// and propagate normally.
    pub fn client_response(&self) -> Option<ClientErrorResponse> {
        match self {
            QueryError::InvalidDate {
                input,
                expected_format,
            } => Some(ClientErrorResponse {
                error: self.to_string(),
                input: input.clone(),
                expected_format: expected_format.to_string(),
            }),
            _ => None,
        }
    }
}
