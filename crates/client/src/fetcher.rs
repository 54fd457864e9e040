use crate::{Credentials, FetchError};
use markbook_types::Record;
use std::time::Duration;

/// Retrieves records from the primary backend.
///
/// One fetcher is built at startup and shared across requests; the timeout is
/// fixed on the underlying client, so a hung backend surfaces as
/// [`FetchError::Transport`] once it expires.
pub struct RecordFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl RecordFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches the record with the given id, authorized by `credentials`.
    pub async fn fetch_record(
        &self,
        id: i64,
        credentials: &Credentials,
    ) -> Result<Record, FetchError> {
        let url = record_url(&self.base_url, id);
        log::debug!("fetching record from {url}");

        let request = credentials.apply(self.http.get(&url));
        let response = request.send().await?;
        let status = response.status();

        // Read the whole body before inspecting the status: failed fetches
        // still carry a body worth logging, and decode failures must stay
        // distinct from transport ones.
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("backend returned {} for record {}: {}", status, id, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let record: Record = serde_json::from_str(&body)?;
        Ok(record)
    }
}

fn record_url(base_url: &str, id: i64) -> String {
    format!(
        "{}/api/v1/internals/students/{}",
        base_url.trim_end_matches('/'),
        id
    )
}
