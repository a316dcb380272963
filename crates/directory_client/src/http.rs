use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{error::ErrorBody, protocol::DirectoryRequest, Record};
use tracing::{debug, warn};
use url::Url;

use crate::{config::ApiSettings, error::FetchError, DirectoryService};

const RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// [`DirectoryService`] over HTTP/JSON.
pub struct HttpDirectoryClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
    retry_count: u32,
}

impl HttpDirectoryClient {
    pub fn new(base_url: &str, timeout: Duration, retry_count: u32) -> Result<Self, FetchError> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| FetchError::Transport(error.to_string()))?;
        Ok(Self {
            http,
            base_url,
            timeout,
            retry_count,
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, FetchError> {
        Self::new(&settings.base_url, settings.timeout(), settings.retry_count)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|error| FetchError::InvalidUrl(error.to_string()))
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                timeout_ms: millis(self.timeout),
            }
        } else if error.is_decode() {
            FetchError::Decode(error.to_string())
        } else {
            FetchError::Transport(error.to_string())
        }
    }

    async fn fetch_once(&self, request: &DirectoryRequest) -> Result<Vec<Record>, FetchError> {
        let url = self.endpoint(request.path())?;
        let builder = self.http.get(url);
        let builder = match request {
            DirectoryRequest::ListClinics => builder,
            DirectoryRequest::ListLocations(query) => builder.query(query),
            DirectoryRequest::ListProcedureOfferings(query) => builder.query(query),
            DirectoryRequest::ListProviders(query) => builder.query(query),
        };
        let response = builder
            .send()
            .await
            .map_err(|error| self.map_reqwest_error(error))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| self.map_reqwest_error(error))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: ErrorBody::message_from_bytes(&body),
            });
        }

        serde_json::from_slice::<Vec<Record>>(&body)
            .map_err(|error| FetchError::Decode(error.to_string()))
    }
}

#[async_trait]
impl DirectoryService for HttpDirectoryClient {
    async fn fetch(&self, request: &DirectoryRequest) -> Result<Vec<Record>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(request).await {
                Ok(records) => {
                    debug!(
                        path = request.path(),
                        count = records.len(),
                        "directory: fetch complete"
                    );
                    return Ok(records);
                }
                Err(error) if error.is_retryable() && attempt < self.retry_count => {
                    attempt += 1;
                    warn!(
                        path = request.path(),
                        attempt,
                        %error,
                        "directory: retrying after connection failure"
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Parses the base URL and makes sure its path ends in `/` so endpoint paths
/// join under it instead of replacing its last segment.
fn normalize_base_url(raw: &str) -> Result<Url, FetchError> {
    let mut url =
        Url::parse(raw.trim()).map_err(|error| FetchError::InvalidUrl(format!("{raw}: {error}")))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
