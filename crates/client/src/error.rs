use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The backend could not be reached, or the request timed out.
    #[error("records backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("records backend returned status {status}")]
    Status { status: u16 },

    /// The response body did not decode as a record.
    #[error("failed to decode record: {0}")]
    Decode(#[from] serde_json::Error),
}
